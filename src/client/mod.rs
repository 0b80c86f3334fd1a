//! Kubernetes discovery client

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::resources::ResourceRegistry;
use futures::future::join_all;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIGroup, APIResourceList};
use kube::{config::KubeConfigOptions, Client, Config};
use tracing::{instrument, warn};

/// Create a Kubernetes client for the specified context
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = load_kubeconfig(context).await?;
    Client::try_from(config).map_err(RegistryError::from)
}

async fn load_kubeconfig(context: Option<&str>) -> Result<Config> {
    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };

    Config::from_kubeconfig(&options)
        .await
        .map_err(|e| RegistryError::Config(format!("Failed to load kubeconfig: {e}")))
}

/// Fetch the preferred resources of every API group, core group first.
///
/// A group that fails to answer is logged and left out; the core group failing is an error.
#[instrument(skip(client))]
pub async fn fetch_discovery_snapshot(client: &Client) -> Result<Vec<APIResourceList>> {
    let mut snapshot = Vec::new();

    let core = client.list_core_api_versions().await?;
    for version in &core.versions {
        snapshot.push(client.list_core_api_resources(version).await?);
    }

    let groups = client.list_api_groups().await?;
    let requests = groups.groups.iter().filter_map(preferred_group_version).map(|gv| async move {
        (gv.clone(), client.list_api_group_resources(&gv).await)
    });

    // join_all keeps the server's group order
    for (group_version, result) in join_all(requests).await {
        match result {
            Ok(list) => snapshot.push(list),
            Err(e) => warn!("Failed to discover {}: {}", group_version, e),
        }
    }

    Ok(snapshot)
}

fn preferred_group_version(group: &APIGroup) -> Option<String> {
    group
        .preferred_version
        .as_ref()
        .or_else(|| group.versions.first())
        .map(|v| v.group_version.clone())
}

/// Build a registry from the cluster, degrading to the built-in snapshot.
///
/// Never fails: without a client, with discovery disabled, or when discovery
/// errors, the registry is populated from the built-in resources.
#[instrument(skip_all)]
pub async fn load_registry(client: Option<&Client>, config: &RegistryConfig) -> ResourceRegistry {
    let snapshot = match client {
        Some(client) if config.discovery_enabled => match fetch_discovery_snapshot(client).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discovery failed, using built-in resources: {}", e);
                None
            }
        },
        _ => None,
    };

    ResourceRegistry::load(snapshot.as_deref(), config)
}
