//! Built-in discovery snapshot used when the cluster cannot be asked

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};

const VERBS: &[&str] = &[
    "create",
    "delete",
    "deletecollection",
    "get",
    "list",
    "patch",
    "update",
    "watch",
];

/// (groupVersion, [(resource, namespaced)])
const BUILTIN_RESOURCES: &[(&str, &[(&str, bool)])] = &[
    (
        "v1",
        &[
            ("bindings", true),
            ("componentstatuses", false),
            ("configmaps", true),
            ("endpoints", true),
            ("events", true),
            ("limitranges", true),
            ("namespaces", false),
            ("nodes", false),
            ("persistentvolumeclaims", true),
            ("persistentvolumes", false),
            ("pods", true),
            ("podtemplates", true),
            ("replicationcontrollers", true),
            ("resourcequotas", true),
            ("secrets", true),
            ("serviceaccounts", true),
            ("services", true),
        ],
    ),
    (
        "admissionregistration.k8s.io/v1",
        &[
            ("mutatingwebhookconfigurations", false),
            ("validatingwebhookconfigurations", false),
        ],
    ),
    ("apiextensions.k8s.io/v1", &[("customresourcedefinitions", false)]),
    ("apiregistration.k8s.io/v1", &[("apiservices", false)]),
    (
        "apps/v1",
        &[
            ("controllerrevisions", true),
            ("daemonsets", true),
            ("deployments", true),
            ("replicasets", true),
            ("statefulsets", true),
        ],
    ),
    ("autoscaling/v2", &[("horizontalpodautoscalers", true)]),
    ("batch/v1", &[("cronjobs", true), ("jobs", true)]),
    (
        "certificates.k8s.io/v1",
        &[("certificatesigningrequests", false)],
    ),
    ("coordination.k8s.io/v1", &[("leases", true)]),
    ("discovery.k8s.io/v1", &[("endpointslices", true)]),
    ("events.k8s.io/v1", &[("events", true)]),
    (
        "networking.k8s.io/v1",
        &[
            ("ingressclasses", false),
            ("ingresses", true),
            ("networkpolicies", true),
        ],
    ),
    ("node.k8s.io/v1", &[("runtimeclasses", false)]),
    ("policy/v1", &[("poddisruptionbudgets", true)]),
    (
        "rbac.authorization.k8s.io/v1",
        &[
            ("clusterrolebindings", false),
            ("clusterroles", false),
            ("rolebindings", true),
            ("roles", true),
        ],
    ),
    ("scheduling.k8s.io/v1", &[("priorityclasses", false)]),
    (
        "storage.k8s.io/v1",
        &[
            ("csidrivers", false),
            ("csinodes", false),
            ("csistoragecapacities", true),
            ("storageclasses", false),
            ("volumeattachments", false),
        ],
    ),
];

/// Discovery snapshot covering the common built-in resource kinds
pub fn fallback_snapshot() -> Vec<APIResourceList> {
    BUILTIN_RESOURCES
        .iter()
        .map(|(group_version, resources)| APIResourceList {
            group_version: group_version.to_string(),
            resources: resources
                .iter()
                .map(|(name, namespaced)| APIResource {
                    name: name.to_string(),
                    namespaced: *namespaced,
                    verbs: VERBS.iter().map(|v| v.to_string()).collect(),
                    ..Default::default()
                })
                .collect(),
        })
        .collect()
}
