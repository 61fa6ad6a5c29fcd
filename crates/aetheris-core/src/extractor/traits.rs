//! Core extractor trait for language-agnostic entity extraction.

use super::error::ExtractionError;
use crate::model::Entity;

/// Unit label used when source text does not come from a file.
pub const ANONYMOUS_UNIT: &str = "<input>";

/// Language-specific entity extractor.
///
/// Implement this trait for each source language. An extractor reads the
/// syntax tree produced by its grammar and emits one [`Entity`] per class,
/// interface, enum, object or annotation declaration, with relationships
/// already classified.
///
/// # Example Implementation
///
/// ```ignore
/// impl LanguageExtractor for JavaExtractor {
///     fn extract(&self, unit: &str, content: &str) -> Result<Vec<Entity>, ExtractionError> {
///         let tree = self.base.parse_tree(unit, content)?;
///         // Walk the tree and build entities...
///     }
///
///     fn language_name(&self) -> &'static str { "Java" }
///     fn supported_extensions(&self) -> &[&'static str] { &["java"] }
/// }
/// ```
pub trait LanguageExtractor: Send + Sync {
    /// Extract entities from one source unit.
    ///
    /// # Arguments
    /// * `unit` - Label identifying the unit in errors (usually its path)
    /// * `content` - Source code content
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Every declaration found, in document order
    /// * `Err(ExtractionError)` - The grammar rejected the text
    fn extract(&self, unit: &str, content: &str) -> Result<Vec<Entity>, ExtractionError>;

    /// Extract entities from source text with no associated unit.
    fn parse(&self, content: &str) -> Result<Vec<Entity>, ExtractionError> {
        self.extract(ANONYMOUS_UNIT, content)
    }

    /// Human-readable language name.
    fn language_name(&self) -> &'static str;

    /// File extensions this extractor handles (without leading dot).
    fn supported_extensions(&self) -> &[&'static str];

    /// Check if this extractor can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
