//! Source-to-entity extraction.
//!
//! Provides a `LanguageExtractor` trait that turns one unit of source code
//! into [`Entity`](crate::model::Entity) values, with tree-sitter based
//! implementations for Java and Kotlin.
//!
//! ## Components
//!
//! - `LanguageExtractor` trait - Common interface for all extractors
//! - `ExtractorRegistry` - Maps file extensions to extractors
//! - `ExtractionError` - A unit the grammar rejected
//!
//! Extraction is all-or-nothing per unit: a syntax error anywhere yields an
//! error and no entities.

mod error;
mod java;
mod kotlin;
mod registry;
mod traits;
mod treesitter;

pub use error::{ExtractionError, UnsupportedExtensionError};
pub use java::JavaExtractor;
pub use kotlin::KotlinExtractor;
pub use registry::{ExtractorRegistry, RegistryError};
pub use traits::{LanguageExtractor, ANONYMOUS_UNIT};
