//! Kubernetes resource names, triples and the discovery-backed registry

pub mod fallback;
pub mod manifest;
pub mod names;
pub mod registry;
pub mod triple;

pub use fallback::fallback_snapshot;
pub use manifest::manifest_kind;
pub use names::normalize;
pub use registry::{global_registry, init_global, ResourceRegistry};
pub use triple::{
    join_group_version, join_triple, parse_group_version, parse_resource_selector,
    split_api_version, split_triple, ResourceTriple, WILDCARD,
};
