//! Buildpack model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::resource::Resource;
use crate::traits::List;

/// An admin buildpack installed on the platform.
pub type Buildpack = Resource<BuildpackEntity>;

/// Buildpack fields returned by `/v2/buildpacks`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackEntity {
    /// Buildpack name (e.g., "go_buildpack").
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Name of the uploaded archive (e.g., "go_buildpack-cached-cflinuxfs3-v1.2.3.zip").
    #[serde(default)]
    pub filename: Option<String>,

    /// Whether the buildpack is used during staging. `null` counts as disabled.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub enabled: bool,
}

/// How an installed buildpack's filename is checked against a droplet's
/// recorded buildpack version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionMatch {
    /// The filename must end with `v<version>.zip`.
    #[default]
    Suffix,
    /// The filename must contain `<version>` anywhere.
    Substring,
}

impl Buildpack {
    /// Buildpack name.
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Whether this buildpack is enabled for staging.
    pub fn is_enabled(&self) -> bool {
        self.entity.enabled
    }

    /// The uploaded archive name, empty if none was uploaded.
    pub fn filename(&self) -> &str {
        self.entity.filename.as_deref().unwrap_or_default()
    }

    /// Check whether the installed archive corresponds to `version`.
    pub fn matches_version(&self, version: &str, policy: VersionMatch) -> bool {
        let filename = self.filename();
        match policy {
            VersionMatch::Suffix => filename.ends_with(&format!("v{version}.zip")),
            VersionMatch::Substring => filename.contains(version),
        }
    }
}

impl List for Buildpack {
    const COLLECTION_PATH: &'static str = "/v2/buildpacks";
}
