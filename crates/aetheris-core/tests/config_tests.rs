use aetheris_core::config::{
    DEFAULT_FORMAT, DEFAULT_LAYOUT_PATH, DEFAULT_MODEL_PATH, DEFAULT_NODE_SEPARATION, DEFAULT_SERVE_PORT,
};
use aetheris_core::{Config, ConfigError, LanguageProfile, Visibility};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.output.format, DEFAULT_FORMAT);
    assert_eq!(config.output.title, None);
    assert_eq!(config.layout.node_separation, DEFAULT_NODE_SEPARATION);
    assert_eq!(config.serve.port, DEFAULT_SERVE_PORT);
    assert_eq!(config.serve.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.serve.layout_path, PathBuf::from(DEFAULT_LAYOUT_PATH));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_to_toml() {
    let toml_str = Config::default_config_string();
    assert!(toml_str.contains("[output]"));
    assert!(toml_str.contains("[layout]"));
    assert!(toml_str.contains("[serve]"));

    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.layout, Config::default().layout);
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[output]
format = "aml"
title = "Fleet"

[layout]
node_separation = 70
package_orientation_threshold = 2

[serve]
port = 9100
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.output.format, "aml");
    assert_eq!(config.output.title.as_deref(), Some("Fleet"));
    assert_eq!(config.layout.node_separation, 70);
    assert_eq!(config.layout.package_orientation_threshold, 2);
    // Unspecified keys keep their defaults.
    assert_eq!(config.layout.rank_separation, Config::default().layout.rank_separation);
    assert_eq!(config.serve.port, 9100);
    assert_eq!(config.serve.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
}

#[test]
fn test_language_overrides() {
    let toml_str = r#"
[languages.java]
containers = ["List", "Stream"]
default_visibility = "-"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();

    let java = config.java_profile();
    assert!(java.is_container("Stream"));
    assert!(!java.is_container("Set"));
    assert_eq!(java.default_visibility, Visibility::Private);
    // Untouched tables stay built in.
    assert_eq!(java.primitives, LanguageProfile::java().primitives);

    assert_eq!(config.kotlin_profile(), LanguageProfile::kotlin());
}

#[test]
fn test_validate_rejects_unknown_format() {
    let config: Config = toml::from_str("[output]\nformat = \"svg\"\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aetheris.toml");
    std::fs::write(&path, "[layout]\nrank_separation = 90\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.layout.rank_separation, 90);
}

#[test]
fn test_from_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = Config::from_file(dir.path().join("missing.toml"));
    assert!(matches!(missing, Err(ConfigError::ReadError(_))));

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[layout\nnode_separation = ").unwrap();
    assert!(matches!(Config::from_file(&broken), Err(ConfigError::ParseError(_))));
}
