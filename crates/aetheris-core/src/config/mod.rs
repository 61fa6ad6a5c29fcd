//! Configuration management for Aetheris.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. An explicit file, or project-local `aetheris.toml`
//! 3. User config `~/.config/aetheris/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::classifier::{LanguageProfile, ProfileOverrides};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagram output settings.
    pub output: OutputConfig,

    /// Layout heuristics for the PlantUML renderer.
    pub layout: LayoutConfig,

    /// Per-language classification tables.
    pub languages: LanguagesConfig,

    /// Layout persistence service.
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./aetheris.toml` (project local)
    /// 2. `~/.config/aetheris/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Path of the user-level config file, if a config dir exists.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(format) = std::env::var("AETHERIS_FORMAT") {
            self.output.format = format;
        }
        if let Ok(title) = std::env::var("AETHERIS_TITLE") {
            self.output.title = Some(title);
        }
        if let Ok(port) = std::env::var("AETHERIS_SERVE_PORT") {
            if let Ok(n) = port.parse() {
                self.serve.port = n;
            }
        }
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !["aml", "puml", "json"].contains(&self.output.format.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "output.format must be one of aml, puml, json (got '{}')",
                self.output.format
            )));
        }
        if self.layout.density_orientation_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "layout.density_orientation_threshold must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Java profile with configured overrides applied.
    pub fn java_profile(&self) -> LanguageProfile {
        LanguageProfile::java().with_overrides(&self.languages.java)
    }

    /// Kotlin profile with configured overrides applied.
    pub fn kotlin_profile(&self) -> LanguageProfile {
        LanguageProfile::kotlin().with_overrides(&self.languages.kotlin)
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Diagram output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "aml", "puml" or "json".
    pub format: String,

    /// Diagram title (PlantUML only). Defaults to the output file stem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            title: None,
        }
    }
}

/// Layout heuristic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Base node separation.
    pub node_separation: u32,

    /// Base rank separation.
    pub rank_separation: u32,

    /// Entity count above which extra spacing is added.
    pub large_diagram_threshold: usize,

    /// Extra node separation for large diagrams.
    pub large_node_separation_bonus: u32,

    /// Extra rank separation for large diagrams.
    pub large_rank_separation_bonus: u32,

    /// Namespace count at which the diagram is laid out left to right.
    pub package_orientation_threshold: usize,

    /// Entities-per-namespace density above which the diagram is laid out left to right.
    pub density_orientation_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_separation: DEFAULT_NODE_SEPARATION,
            rank_separation: DEFAULT_RANK_SEPARATION,
            large_diagram_threshold: DEFAULT_LARGE_DIAGRAM_THRESHOLD,
            large_node_separation_bonus: DEFAULT_LARGE_NODE_SEPARATION_BONUS,
            large_rank_separation_bonus: DEFAULT_LARGE_RANK_SEPARATION_BONUS,
            package_orientation_threshold: DEFAULT_PACKAGE_ORIENTATION_THRESHOLD,
            density_orientation_threshold: DEFAULT_DENSITY_ORIENTATION_THRESHOLD,
        }
    }
}

/// Per-language overrides of the built-in classification tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesConfig {
    pub java: ProfileOverrides,
    pub kotlin: ProfileOverrides,
}

/// Layout persistence service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,

    /// Model JSON served at `/api/model`.
    pub model_path: PathBuf,

    /// Layout JSON read and written at `/api/layout`.
    pub layout_path: PathBuf,

    /// CORS origins allowed to call the service.
    pub allowed_origins: Vec<String>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVE_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
