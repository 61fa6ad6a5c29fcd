//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// A source unit could not be turned into entities.
///
/// Never accompanied by partial output: a unit either yields all its
/// entities or this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The grammar could not be loaded into the parser.
    #[error("Failed to load {language} grammar: {message}")]
    Grammar { language: String, message: String },

    /// The parser gave up without producing a tree.
    #[error("{language} parser produced no syntax tree for {unit}")]
    NoTree { unit: String, language: String },

    /// The syntax tree contains an error or missing node.
    #[error("{language} syntax error in {unit} at line {line}, column {column}")]
    Syntax {
        unit: String,
        language: String,
        line: usize,
        column: usize,
    },
}

impl ExtractionError {
    /// The unit (usually a file path) that failed, if known.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Grammar { .. } => None,
            Self::NoTree { unit, .. } | Self::Syntax { unit, .. } => Some(unit),
        }
    }

    /// Name of the language whose grammar reported the failure.
    pub fn language(&self) -> &str {
        match self {
            Self::Grammar { language, .. }
            | Self::NoTree { language, .. }
            | Self::Syntax { language, .. } => language,
        }
    }
}

/// No extractor is registered for a file's extension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No extractor registered for extension '{extension}' ({})", path.display())]
pub struct UnsupportedExtensionError {
    pub path: PathBuf,
    pub extension: String,
}

impl UnsupportedExtensionError {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        Self { path, extension }
    }
}
