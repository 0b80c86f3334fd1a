//! Group/version/resource triples and their string forms

use crate::error::{RegistryError, Result};
use kube::core::GroupVersionResource;
use std::fmt;

/// Wildcard token accepted wherever a triple field may be left unspecified
pub const WILDCARD: &str = "*";

/// A fully or partially specified (group, version, resource) address.
///
/// The all-empty triple is the "match anything" value returned for wildcard lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceTriple {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl ResourceTriple {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    /// True for the wildcard sentinel
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.resource.is_empty()
    }

    /// apiVersion as written in a manifest; the core group has no prefix
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            join_group_version(&self.group, &self.version)
        }
    }
}

impl fmt::Display for ResourceTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.resource)
    }
}

impl From<ResourceTriple> for GroupVersionResource {
    fn from(t: ResourceTriple) -> Self {
        GroupVersionResource::gvr(&t.group, &t.version, &t.resource)
    }
}

/// Join group and version with `/`
pub fn join_group_version(group: &str, version: &str) -> String {
    format!("{group}/{version}")
}

/// Split an apiVersion into (group, version).
///
/// The first segment is always taken as the group, so `"v1"` yields `("v1", "")`.
pub fn split_api_version(api_version: &str) -> (String, String) {
    let mut parts = api_version.split('/');
    let group = parts.next().unwrap_or_default().to_string();
    let version = parts.next().unwrap_or_default().to_string();
    (group, version)
}

/// Parse a discovery groupVersion string, where `"v1"` is the core group.
pub fn parse_group_version(group_version: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = group_version.split('/').collect();
    match parts.as_slice() {
        [version] if !version.is_empty() => Ok((String::new(), version.to_string())),
        [group, version] if !version.is_empty() => Ok((group.to_string(), version.to_string())),
        _ => Err(RegistryError::MalformedGroupVersion(group_version.to_string())),
    }
}

/// Join group, version and resource with `/`
pub fn join_triple(group: &str, version: &str, resource: &str) -> String {
    format!("{group}/{version}/{resource}")
}

/// Split "group/version/resource" back into its parts.
///
/// Anything other than exactly three segments yields all-empty strings.
pub fn split_triple(triple: &str) -> (String, String, String) {
    let parts: Vec<&str> = triple.split('/').collect();
    match parts.as_slice() {
        [group, version, resource] => (group.to_string(), version.to_string(), resource.to_string()),
        _ => (String::new(), String::new(), String::new()),
    }
}

/// Like [`split_triple`], but `*` segments are read as unspecified.
pub fn parse_resource_selector(selector: &str) -> ResourceTriple {
    let (group, version, resource) = split_triple(selector);
    let unwild = |s: String| if s == WILDCARD { String::new() } else { s };
    ResourceTriple::new(unwild(group), unwild(version), unwild(resource))
}
