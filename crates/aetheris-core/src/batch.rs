//! Batch conversion of files and directories.
//!
//! Discovers source files, routes each through the extractor registry and
//! collects the results. A file that cannot be read or parsed is recorded as
//! a failure and skipped; the rest of the batch carries on.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::config::Config;
use crate::extractor::{ExtractionError, ExtractorRegistry, RegistryError, UnsupportedExtensionError};
use crate::model::Entity;

/// Errors from converting files into entities.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedExtensionError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every file was skipped or yielded nothing.
    #[error("No entities extracted")]
    NoEntities,
}

impl From<RegistryError> for ConvertError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Unsupported(e) => Self::Unsupported(e),
            RegistryError::Extraction(e) => Self::Extraction(e),
        }
    }
}

/// A file that was skipped.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ConvertError,
}

/// Outcome of converting a set of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Entities from every converted file, in file order.
    pub entities: Vec<Entity>,
    /// Files that were converted (possibly yielding no entities).
    pub converted: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The extracted entities, or [`ConvertError::NoEntities`] if there are none.
    pub fn into_entities(self) -> Result<Vec<Entity>, ConvertError> {
        if self.entities.is_empty() {
            return Err(ConvertError::NoEntities);
        }
        Ok(self.entities)
    }
}

/// Converts files to entities through an [`ExtractorRegistry`].
pub struct BatchConverter {
    registry: ExtractorRegistry,
}

impl BatchConverter {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Converter whose extractors use the configured language tables.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ExtractorRegistry::from_config(config))
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Files to convert under `path`.
    ///
    /// A file is returned as-is, whatever its extension. A directory is walked
    /// (hidden and git-ignored entries skipped) and only files with a
    /// registered extension are kept, sorted by path.
    pub fn discover(&self, path: impl AsRef<Path>) -> Result<Vec<PathBuf>, ConvertError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        let walker = WalkBuilder::new(path).hidden(true).git_ignore(true).build();

        let mut files: Vec<PathBuf> = walker
            .flatten()
            .map(|entry| entry.into_path())
            .filter(|file| file.is_file() && self.registry.extractor_for_path(file).is_some())
            .collect();
        files.sort();

        tracing::debug!(root = %path.display(), count = files.len(), "discovered source files");
        Ok(files)
    }

    /// Read and extract a single file.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Vec<Entity>, ConvertError> {
        let path = path.as_ref();
        if self.registry.extractor_for_path(path).is_none() {
            return Err(UnsupportedExtensionError::new(path).into());
        }

        let content = fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.registry.extract(path, &content)?)
    }

    /// Convert every file, isolating failures.
    pub fn convert_all(&self, files: &[PathBuf]) -> BatchReport {
        self.convert_all_with(files, |_| {})
    }

    /// Like [`convert_all`](Self::convert_all), calling `on_file` after each file.
    pub fn convert_all_with<F>(&self, files: &[PathBuf], mut on_file: F) -> BatchReport
    where
        F: FnMut(&Path),
    {
        let mut report = BatchReport::default();

        for path in files {
            match self.convert_file(path) {
                Ok(entities) => {
                    tracing::info!(file = %path.display(), entities = entities.len(), "converted");
                    report.entities.extend(entities);
                    report.converted.push(path.clone());
                }
                Err(error) => {
                    tracing::warn!(file = %path.display(), %error, "skipping file");
                    report.failures.push(FileFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
            on_file(path);
        }

        report
    }
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new(ExtractorRegistry::new())
    }
}
