//! Coarse classification of decoded manifests

use crate::resources::registry::ResourceRegistry;
use serde_json::Value;

/// The `kind` of a decoded manifest, if it is a string
pub fn manifest_kind(object: &Value) -> Option<&str> {
    object.get("kind")?.as_str()
}

impl ResourceRegistry {
    /// Check if a decoded manifest carries an `apiVersion` and a `kind` this registry knows.
    ///
    /// Only the kind is checked against the registry; the apiVersion just has to be present.
    pub fn is_workload_like(&self, object: &Value) -> bool {
        let Some(map) = object.as_object() else {
            return false;
        };

        if !map.contains_key("apiVersion") {
            return false;
        }

        match manifest_kind(object) {
            Some(kind) => self.is_known_kubernetes_kind(kind),
            None => false,
        }
    }
}
