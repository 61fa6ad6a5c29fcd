pub mod batch;
pub mod classifier;
pub mod config;
pub mod extractor;
pub mod model;
pub mod synth;

pub use batch::{BatchConverter, BatchReport, ConvertError, FileFailure};
pub use classifier::{LanguageProfile, ProfileOverrides};
pub use config::{Config, ConfigError, LayoutConfig, OutputConfig, ServeConfig};
pub use extractor::{
    ExtractionError, ExtractorRegistry, JavaExtractor, KotlinExtractor, LanguageExtractor,
    UnsupportedExtensionError,
};
pub use model::{Entity, EntityKind, Field, Method, RelationKind, Visibility};
pub use synth::{plan_layout, DiagramSynthesizer, LayoutPlan, OutputFormat};
