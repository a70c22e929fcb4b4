//! Droplet model and trait implementations.
//!
//! Droplets come from the `/v3` API, so they don't use the `/v2` resource
//! envelope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::CfClient;
use crate::error::Result;
use crate::traits::Get;

/// The staged artifact behind an application's current deployment.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Droplet {
    /// Droplet GUID.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub guid: String,

    /// Buildpacks that actually ran during staging.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub buildpacks: Vec<DropletBuildpack>,
}

/// One buildpack entry recorded on a droplet.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletBuildpack {
    /// Admin buildpack name (e.g., "go_buildpack").
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Name the buildpack reports for itself (e.g., "go").
    #[serde(default)]
    pub buildpack_name: Option<String>,

    /// Version the buildpack reports for itself.
    #[serde(default)]
    pub version: Option<String>,
}

impl DropletBuildpack {
    /// The version string, if the buildpack reported a non-empty one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// Human-readable `"<name> v<version>"`, preferring the buildpack's own
    /// name over the admin name.
    pub fn display(&self) -> Option<String> {
        let version = self.version()?;
        let name = self
            .buildpack_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name);
        Some(format!("{name} v{version}"))
    }
}

#[async_trait]
impl Get for Droplet {
    type Id = String; // Application GUID

    /// Fetch the current droplet of the application with the given GUID.
    #[tracing::instrument(skip(client))]
    async fn get(client: &CfClient, app_guid: String) -> Result<Self> {
        let path = format!(
            "/v3/apps/{}/droplets/current",
            urlencoding::encode(&app_guid)
        );
        client.get_json(&path).await
    }
}
