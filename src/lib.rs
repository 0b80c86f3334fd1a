//! kindmap - Resolve short Kubernetes resource names to group/version/resource triples

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use resources::{ResourceRegistry, ResourceTriple};
