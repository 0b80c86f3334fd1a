//! Tests for src/config/mod.rs - RegistryConfig loading

use kindmap::config::{load_config_from, RegistryConfig};
use std::io::Write;

#[test]
fn test_load_missing_file_gives_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"ignored_groups = ["metrics.k8s.io", "custom.metrics.k8s.io"]
fill_from_fallback = false"#
    )
    .unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert!(config.is_ignored("custom.metrics.k8s.io"));
    assert!(!config.fill_from_fallback);
    assert!(config.discovery_enabled);
}

#[test]
fn test_load_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fill_from_fallback = \"maybe\"").unwrap();
    assert!(load_config_from(file.path()).is_err());
}
