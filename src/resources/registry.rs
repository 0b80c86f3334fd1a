//! Resource registry built from a discovery snapshot

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::resources::fallback::fallback_snapshot;
use crate::resources::names::normalize;
use crate::resources::triple::{
    join_group_version, join_triple, parse_group_version, ResourceTriple, WILDCARD,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Registry mapping resource names to the group/version that serves them.
///
/// Populate it once, then share it by reference; every query is a read.
/// Calling [`populate`](Self::populate) again merges: names already present
/// keep their original group/version.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    /// resource name -> "group/version"
    group_versions: BTreeMap<String, String>,
    /// "group/version/resource" of namespaced resources
    namespaced: BTreeSet<String>,
    /// "group/version/resource" of cluster-scoped resources
    cluster_scoped: BTreeSet<String>,
    ignored_groups: Vec<String>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    /// Create an empty registry with the default ignored groups
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry honouring `config`'s ignored groups
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            group_versions: BTreeMap::new(),
            namespaced: BTreeSet::new(),
            cluster_scoped: BTreeSet::new(),
            ignored_groups: config.ignored_groups.clone(),
        }
    }

    /// Create a registry populated from `snapshot`
    pub fn from_snapshot(snapshot: &[APIResourceList]) -> Self {
        let mut registry = Self::new();
        registry.populate(snapshot);
        registry
    }

    /// Create a registry populated from the built-in snapshot only
    pub fn fallback() -> Self {
        Self::from_snapshot(&fallback_snapshot())
    }

    /// Build a registry from an optional live snapshot.
    ///
    /// A missing snapshot, or one that registers nothing, is replaced by the
    /// built-in one. With `fill_from_fallback` the built-in snapshot is also
    /// ingested after a live one, so it only adds names the cluster did not report.
    pub fn load(snapshot: Option<&[APIResourceList]>, config: &RegistryConfig) -> Self {
        let mut registry = Self::with_config(config);

        if let Some(snapshot) = snapshot {
            registry.populate(snapshot);
        }

        if registry.is_empty() {
            warn!("Discovery snapshot unavailable or empty, using built-in resources");
            registry.populate(&fallback_snapshot());
        } else if config.fill_from_fallback {
            registry.populate(&fallback_snapshot());
        }

        registry
    }

    /// Ingest a discovery snapshot.
    ///
    /// Entries with an unparsable groupVersion or an ignored group are skipped
    /// whole; resources without verbs are skipped; the first group/version seen
    /// for a name wins.
    pub fn populate(&mut self, snapshot: &[APIResourceList]) {
        let before = self.group_versions.len();

        for list in snapshot {
            let (group, version) = match parse_group_version(&list.group_version) {
                Ok(gv) => gv,
                Err(e) => {
                    debug!("Skipping discovery entry: {}", e);
                    continue;
                }
            };

            if self.ignored_groups.iter().any(|g| *g == group) {
                debug!(group = %group, "Skipping ignored API group");
                continue;
            }

            let group_version = join_group_version(&group, &version);

            for resource in &list.resources {
                if resource.verbs.is_empty() {
                    continue;
                }

                let Entry::Vacant(slot) = self.group_versions.entry(resource.name.clone()) else {
                    continue;
                };
                slot.insert(group_version.clone());

                let triple = join_triple(&group, &version, &resource.name);
                if resource.namespaced {
                    self.namespaced.insert(triple);
                } else {
                    self.cluster_scoped.insert(triple);
                }
            }
        }

        debug!(
            added = self.group_versions.len() - before,
            total = self.group_versions.len(),
            "Populated resource registry"
        );
    }

    /// Ingest `snapshot`, then the built-in snapshot to fill any gaps
    pub fn populate_with_fallback(&mut self, snapshot: &[APIResourceList]) {
        self.populate(snapshot);
        self.populate(&fallback_snapshot());
    }

    /// Number of registered resource names
    pub fn len(&self) -> usize {
        self.group_versions.len()
    }

    /// Check if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.group_versions.is_empty()
    }

    /// Registered resource names, sorted
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.group_versions.keys().map(String::as_str)
    }

    /// "group/version" registered for an exact resource name
    pub fn group_version_of(&self, resource: &str) -> Option<&str> {
        self.group_versions.get(resource).map(String::as_str)
    }

    /// Resolve a kind or resource name into its triple.
    ///
    /// `""` and `"*"` resolve to the empty triple, meaning "any resource".
    pub fn resolve(&self, name: &str) -> Result<ResourceTriple> {
        let resource = normalize(name);

        if let Some(group_version) = self.group_versions.get(&resource) {
            let parts: Vec<&str> = group_version.split('/').collect();
            if parts.len() >= 2 {
                return Ok(ResourceTriple::new(parts[0], parts[1], resource));
            }
        }

        if resource.is_empty() || name == WILDCARD {
            return Ok(ResourceTriple::default());
        }

        Err(RegistryError::UnknownResource(name.to_string()))
    }

    /// Check if `name` resolves, wildcard included
    pub fn is_known_kubernetes_kind(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Check if the triple was discovered as namespaced.
    ///
    /// False both for cluster-scoped and for unknown resources.
    pub fn is_namespace_scoped(&self, triple: &ResourceTriple) -> bool {
        let resource = normalize(&triple.resource);
        self.namespaced
            .contains(&join_triple(&triple.group, &triple.version, &resource))
    }

    /// Check if `name` resolves to a namespaced resource
    pub fn is_namespace_scoped_by_name(&self, name: &str) -> bool {
        match self.resolve(name) {
            Ok(triple) => self.is_namespace_scoped(&triple),
            Err(_) => false,
        }
    }

    /// Check if the triple was discovered as cluster-scoped
    #[deprecated(note = "use `is_namespace_scoped`; unknown and cluster-scoped resources both report false there")]
    pub fn is_cluster_scoped(&self, triple: &ResourceTriple) -> bool {
        let resource = normalize(&triple.resource);
        self.cluster_scoped
            .contains(&join_triple(&triple.group, &triple.version, &resource))
    }

    /// Expand a partially specified triple into the registered triples it matches.
    ///
    /// Empty fields are unspecified. A fully specified triple is passed through
    /// without consulting the registry.
    pub fn expand_triples(&self, group: &str, version: &str, resource: &str) -> Vec<ResourceTriple> {
        if resource.is_empty() {
            return self
                .entries()
                .filter(|t| group.is_empty() || t.group == group)
                .filter(|t| version.is_empty() || t.version == version)
                .collect();
        }

        if !group.is_empty() && !version.is_empty() {
            return vec![ResourceTriple::new(group, version, resource)];
        }

        let Some((known_group, known_version)) = self
            .group_versions
            .get(resource)
            .and_then(|gv| gv.split_once('/'))
        else {
            debug!(resource = %resource, "Resource unknown, nothing to expand");
            return Vec::new();
        };

        let group = if group.is_empty() { known_group } else { group };
        let version = if version.is_empty() { known_version } else { version };
        vec![ResourceTriple::new(group, version, resource)]
    }

    /// Wildcard-aware [`expand_triples`](Self::expand_triples).
    ///
    /// `*` in any field means unspecified. Resources the registry does not know
    /// are returned as given, so custom resources pass through untouched.
    pub fn expand_wildcard_triple(
        &self,
        group: &str,
        version: &str,
        resource: &str,
    ) -> Vec<ResourceTriple> {
        let unwild = |s: &str| if s == WILDCARD { String::new() } else { s.to_string() };
        let (group, version, resource) = (unwild(group), unwild(version), unwild(resource));

        if !self.is_known_kubernetes_kind(&resource) {
            return vec![ResourceTriple::new(group, version, resource)];
        }

        self.expand_triples(&group, &version, &normalize(&resource))
    }

    fn entries(&self) -> impl Iterator<Item = ResourceTriple> + '_ {
        self.group_versions.iter().filter_map(|(name, gv)| {
            gv.split_once('/')
                .map(|(group, version)| ResourceTriple::new(group, version, name.as_str()))
        })
    }
}

/// Process-wide registry
static GLOBAL_REGISTRY: OnceLock<ResourceRegistry> = OnceLock::new();

/// Install the process-wide registry. Fails if one is already installed.
pub fn init_global(registry: ResourceRegistry) -> Result<&'static ResourceRegistry> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    Ok(global_registry())
}

/// Get the process-wide registry, using the built-in snapshot if none was installed
pub fn global_registry() -> &'static ResourceRegistry {
    GLOBAL_REGISTRY.get_or_init(ResourceRegistry::fallback)
}
