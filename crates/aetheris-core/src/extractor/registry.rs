//! Extractor registry for managing language-specific extractors.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use super::error::{ExtractionError, UnsupportedExtensionError};
use super::java::JavaExtractor;
use super::kotlin::KotlinExtractor;
use super::traits::LanguageExtractor;
use crate::config::Config;
use crate::model::Entity;

/// Why a file could not be extracted through the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedExtensionError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Registry of language extractors.
///
/// Maps lowercase file extensions to their extractor. Registering a second
/// extractor for an extension replaces the first.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn LanguageExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with the built-in Java and Kotlin extractors.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JavaExtractor::new()));
        registry.register(Arc::new(KotlinExtractor::new()));
        registry
    }

    /// Create a registry whose extractors use the configured language tables.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JavaExtractor::with_profile(config.java_profile())));
        registry.register(Arc::new(KotlinExtractor::with_profile(config.kotlin_profile())));
        registry
    }

    /// Create a registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor for its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn LanguageExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors.insert(ext.to_lowercase(), Arc::clone(&extractor));
        }
    }

    /// Get the extractor for an extension, with or without its leading dot.
    pub fn extractor_for_extension(&self, extension: &str) -> Option<Arc<dyn LanguageExtractor>> {
        self.extractors.get(&normalize(extension)).cloned()
    }

    /// Get the extractor for a file path.
    pub fn extractor_for_path(&self, path: impl AsRef<Path>) -> Option<Arc<dyn LanguageExtractor>> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.extractor_for_extension(ext))
    }

    /// Check if any extractor handles the given extension.
    pub fn can_parse(&self, extension: &str) -> bool {
        self.extractors.contains_key(&normalize(extension))
    }

    /// All supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        sorted.into_iter().collect()
    }

    /// Registered languages with their extensions, sorted by language name.
    pub fn list_extractors(&self) -> Vec<(&'static str, &[&'static str])> {
        // The same extractor is registered once per extension.
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for extractor in self.extractors.values() {
            let name = extractor.language_name();
            if seen.insert(name) {
                result.push((name, extractor.supported_extensions()));
            }
        }

        result.sort_by_key(|(name, _)| *name);
        result
    }

    /// Extract entities from a file's content, choosing the extractor by extension.
    pub fn extract(&self, path: impl AsRef<Path>, content: &str) -> Result<Vec<Entity>, RegistryError> {
        let path = path.as_ref();
        let extractor = self
            .extractor_for_path(path)
            .ok_or_else(|| UnsupportedExtensionError::new(path))?;

        Ok(extractor.extract(&path.display().to_string(), content)?)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_builtin_extractors() {
        let registry = ExtractorRegistry::new();
        assert!(registry.can_parse("java"));
        assert!(registry.can_parse("kt"));
        assert!(registry.can_parse("kts"));
        assert!(!registry.can_parse("py"));
    }

    #[test]
    fn test_extractor_for_path() {
        let registry = ExtractorRegistry::new();
        let java = registry.extractor_for_path("src/main/java/Order.java");
        assert_eq!(java.map(|e| e.language_name()), Some("Java"));

        let kotlin = registry.extractor_for_path("build.gradle.kts");
        assert_eq!(kotlin.map(|e| e.language_name()), Some("Kotlin"));

        assert!(registry.extractor_for_path("notes.txt").is_none());
        assert!(registry.extractor_for_path("Makefile").is_none());
    }

    #[test]
    fn test_case_insensitive_and_leading_dot() {
        let registry = ExtractorRegistry::new();
        assert!(registry.can_parse("JAVA"));
        assert!(registry.can_parse(".Kt"));
        assert!(registry.extractor_for_extension(".java").is_some());
    }

    #[test]
    fn test_supported_extensions_sorted() {
        let registry = ExtractorRegistry::new();
        assert_eq!(registry.supported_extensions(), vec!["java", "kt", "kts"]);
    }

    #[test]
    fn test_list_extractors_deduplicates() {
        let registry = ExtractorRegistry::new();
        let listed = registry.list_extractors();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].0, "Java");
        assert_eq!(listed[1].0, "Kotlin");
        assert_eq!(listed[1].1, &["kt", "kts"]);
    }

    #[test]
    fn test_extract_unsupported_extension() {
        let registry = ExtractorRegistry::new();
        let err = registry.extract("script.py", "print('hi')").unwrap_err();
        match err {
            RegistryError::Unsupported(e) => assert_eq!(e.extension, "py"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExtractorRegistry::empty();
        assert!(registry.supported_extensions().is_empty());
        assert!(!registry.can_parse("java"));
    }
}
