// Common test utilities and helpers

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};
use kindmap::ResourceRegistry;

/// Create a mock discovery resource with the usual read verbs
pub fn create_mock_resource(name: &str, namespaced: bool) -> APIResource {
    APIResource {
        name: name.to_string(),
        namespaced,
        verbs: vec!["get".to_string(), "list".to_string(), "watch".to_string()],
        ..Default::default()
    }
}

/// Create a mock discovery resource that exposes no verbs
pub fn create_mock_verbless_resource(name: &str, namespaced: bool) -> APIResource {
    APIResource {
        verbs: Vec::new(),
        ..create_mock_resource(name, namespaced)
    }
}

/// Create a mock discovery entry for one groupVersion
pub fn create_mock_resource_list(group_version: &str, resources: &[(&str, bool)]) -> APIResourceList {
    APIResourceList {
        group_version: group_version.to_string(),
        resources: resources
            .iter()
            .map(|(name, namespaced)| create_mock_resource(name, *namespaced))
            .collect(),
    }
}

/// Create a small snapshot resembling a real cluster
pub fn create_mock_snapshot() -> Vec<APIResourceList> {
    vec![
        create_mock_resource_list("metrics.k8s.io/v1beta1", &[("pods", true), ("nodemetrics", false)]),
        create_mock_resource_list(
            "v1",
            &[("pods", true), ("services", true), ("nodes", false), ("namespaces", false)],
        ),
        create_mock_resource_list("apps/v1", &[("deployments", true), ("replicasets", true)]),
        create_mock_resource_list("networking.k8s.io/v1", &[("networkpolicies", true)]),
    ]
}

/// Create a registry from the mock snapshot
pub fn create_mock_registry() -> ResourceRegistry {
    ResourceRegistry::from_snapshot(&create_mock_snapshot())
}

/// Render triples as "group/version/resource", sorted
pub fn sorted_strings(triples: &[kindmap::ResourceTriple]) -> Vec<String> {
    let mut out: Vec<String> = triples.iter().map(ToString::to_string).collect();
    out.sort();
    out
}
