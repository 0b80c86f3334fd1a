//! Error types for kindmap

use thiserror::Error;

/// Main error type for kindmap
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Malformed group/version: '{0}'")]
    MalformedGroupVersion(String),

    #[error("resource '{0}' unknown. Make sure the resource is found at `kubectl api-resources`")]
    UnknownResource(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Registry already initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for RegistryError {
    fn from(e: toml::de::Error) -> Self {
        RegistryError::Config(e.to_string())
    }
}

/// Result type alias for kindmap
pub type Result<T> = std::result::Result<T, RegistryError>;
