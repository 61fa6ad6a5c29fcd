//! File-backed storage for the model and layout documents.

use std::io;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use super::models::LayoutData;

/// Reads the model JSON and reads/writes the layout JSON.
///
/// Writes are serialized so concurrent saves never interleave.
pub struct LayoutStore {
    model_path: PathBuf,
    layout_path: PathBuf,
    write_lock: Mutex<()>,
}

impl LayoutStore {
    pub fn new(model_path: impl Into<PathBuf>, layout_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            layout_path: layout_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn layout_path(&self) -> &Path {
        &self.layout_path
    }

    /// The model document, or `None` if it has not been generated yet.
    pub async fn load_model(&self) -> io::Result<Option<serde_json::Value>> {
        match tokio::fs::read_to_string(&self.model_path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Saved positions; empty if nothing was saved yet.
    pub async fn load_layout(&self) -> io::Result<LayoutData> {
        match tokio::fs::read_to_string(&self.layout_path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LayoutData::default()),
            Err(e) => Err(e),
        }
    }

    /// Replace the saved positions.
    pub async fn save_layout(&self, layout: &LayoutData) -> io::Result<()> {
        let content = serde_json::to_string_pretty(layout)?;

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.layout_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.layout_path, content).await
    }
}
