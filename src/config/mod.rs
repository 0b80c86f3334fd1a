//! Registry configuration for kindmap

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API groups whose resources are never registered
pub const IGNORED_GROUPS: &[&str] = &["metrics.k8s.io"];

/// Registry configuration stored in ~/.kindmap/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// API groups skipped during population
    #[serde(default = "default_ignored_groups")]
    pub ignored_groups: Vec<String>,

    /// Ingest the built-in snapshot after a live one to fill gaps
    #[serde(default = "default_true")]
    pub fill_from_fallback: bool,

    /// Query the cluster discovery endpoint at all
    #[serde(default = "default_true")]
    pub discovery_enabled: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            ignored_groups: default_ignored_groups(),
            fill_from_fallback: true,
            discovery_enabled: true,
        }
    }
}

impl RegistryConfig {
    /// Check whether resources of `group` are skipped
    pub fn is_ignored(&self, group: &str) -> bool {
        self.ignored_groups.iter().any(|g| g == group)
    }
}

fn default_true() -> bool {
    true
}

fn default_ignored_groups() -> Vec<String> {
    IGNORED_GROUPS.iter().map(|g| g.to_string()).collect()
}

/// Get the kindmap config directory (~/.kindmap)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".kindmap"))
        .ok_or_else(|| RegistryError::Config("Could not determine home directory".to_string()))
}

/// Load registry config from ~/.kindmap/config.toml
pub fn load_config() -> Result<RegistryConfig> {
    load_config_from(&config_dir()?.join("config.toml"))
}

/// Load registry config from an explicit path, falling back to defaults when absent
pub fn load_config_from(path: &Path) -> Result<RegistryConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        Ok(RegistryConfig::default())
    }
}
