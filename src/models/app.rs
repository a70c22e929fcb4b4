//! Application model.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::resource::Resource;

/// An application deployed in a space.
pub type App = Resource<AppEntity>;

/// Application fields returned by `/v2/spaces/:guid/apps`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppEntity {
    /// Application name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Buildpack requested at push time (name or git URL).
    #[serde(default)]
    pub buildpack: Option<String>,

    /// Buildpack detected during the last staging.
    #[serde(default)]
    pub detected_buildpack: Option<String>,
}

impl App {
    /// Application name.
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// The single buildpack recorded on the `/v2` app itself.
    ///
    /// Falls back to the detected buildpack when none was requested.
    pub fn legacy_buildpack(&self) -> Option<&str> {
        [&self.entity.buildpack, &self.entity.detected_buildpack]
            .into_iter()
            .filter_map(|b| b.as_deref())
            .find(|b| !b.is_empty())
    }
}
