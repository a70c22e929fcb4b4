//! Buildpack usage report.
//!
//! Runs in two phases. First the enabled admin buildpacks are indexed by
//! name. Then every application's current droplet is compared against that
//! index: each buildpack the droplet was staged with must still be enabled,
//! and the installed archive must carry the same version.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::CfClient;
use crate::error::Result;
use crate::models::{App, Buildpack, Droplet, Organization, VersionMatch};
use crate::traits::{Get, List};

/// Message recorded for an application with nothing to report.
pub const OK: &str = "OK";

/// Message recorded when an application's droplet could not be fetched.
pub const NEEDS_ATTENTION_DROPLET_FAILED: &str = "needs attention (droplet fetch failed)";

/// Options for [`report_buildpacks`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildpacksReportOptions {
    /// How installed archive names are matched against droplet versions.
    pub version_match: VersionMatch,
}

/// Enabled admin buildpacks keyed by name.
///
/// When several enabled buildpacks share a name (one per stack), the one
/// listed last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildpackIndex {
    by_name: HashMap<String, Buildpack>,
}

impl BuildpackIndex {
    /// Walk `/v2/buildpacks` and index the enabled entries.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    #[tracing::instrument(skip(client))]
    pub async fn build(client: &CfClient) -> Result<Self> {
        let mut index = Self::default();
        let mut buildpacks = Buildpack::list(client);
        while let Some(buildpack) = buildpacks.try_next().await? {
            index.insert(buildpack);
        }
        tracing::debug!(enabled = index.len(), "buildpack index built");
        Ok(index)
    }

    /// Index the enabled buildpacks from `buildpacks`.
    pub fn from_buildpacks(buildpacks: impl IntoIterator<Item = Buildpack>) -> Self {
        let mut index = Self::default();
        for buildpack in buildpacks {
            index.insert(buildpack);
        }
        index
    }

    fn insert(&mut self, buildpack: Buildpack) {
        if buildpack.is_enabled() {
            self.by_name.insert(buildpack.name().to_string(), buildpack);
        }
    }

    /// Look up an enabled buildpack by name.
    pub fn get(&self, name: &str) -> Option<&Buildpack> {
        self.by_name.get(name)
    }

    /// Number of indexed buildpacks.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no enabled buildpack was found.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Buildpacks used by one application, plus anything worth flagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackUsage {
    /// Organization name.
    pub organization: String,
    /// Space name.
    pub space: String,
    /// Application name.
    pub application: String,
    /// Buildpacks in use, as `"<name> v<version>"` where known.
    pub buildpacks: Vec<String>,
    /// Diagnostics; `["OK"]` when there is nothing to flag.
    pub messages: Vec<String>,
}

/// Walk every application and report the buildpacks it was staged with.
///
/// The buildpack index is fully built before the first application is
/// looked at. A droplet that cannot be fetched is flagged on that
/// application's row; every other failure aborts the report.
///
/// # Errors
///
/// Returns the first failure outside of droplet lookups.
#[tracing::instrument(skip(client))]
pub async fn report_buildpacks(
    client: &CfClient,
    options: &BuildpacksReportOptions,
) -> Result<Vec<BuildpackUsage>> {
    let index = BuildpackIndex::build(client).await?;
    let mut rows = Vec::new();

    let mut orgs = Organization::list(client);
    while let Some(org) = orgs.try_next().await? {
        let mut spaces = org.spaces(client);
        while let Some(space) = spaces.try_next().await? {
            let mut apps = space.apps(client);
            while let Some(app) = apps.try_next().await? {
                let droplet = Droplet::get(client, app.guid().to_string()).await;
                let mut usage = reconcile(&app, droplet, &index, options.version_match);
                usage.organization = org.name().to_string();
                usage.space = space.name().to_string();
                rows.push(usage);
            }
        }
    }

    tracing::debug!(rows = rows.len(), "buildpack report complete");
    Ok(rows)
}

/// Compare one application's droplet against the buildpack index.
///
/// The returned row has empty organization and space names; the caller
/// fills them in.
pub fn reconcile(
    app: &App,
    droplet: Result<Droplet>,
    index: &BuildpackIndex,
    policy: VersionMatch,
) -> BuildpackUsage {
    let mut usage = BuildpackUsage {
        organization: String::new(),
        space: String::new(),
        application: app.name().to_string(),
        buildpacks: Vec::new(),
        messages: Vec::new(),
    };

    let droplet = match droplet {
        Ok(droplet) => droplet,
        Err(e) => {
            tracing::warn!(app = app.name(), guid = app.guid(), error = %e, "droplet fetch failed");
            usage.messages.push(NEEDS_ATTENTION_DROPLET_FAILED.to_string());
            return usage;
        }
    };

    if droplet.buildpacks.is_empty() {
        usage
            .messages
            .push("needs attention (droplet has no buildpacks)".to_string());
    }

    for entry in &droplet.buildpacks {
        let (Some(version), Some(display)) = (entry.version(), entry.display()) else {
            continue;
        };

        match index.get(&entry.name) {
            None => usage.messages.push(format!(
                "needs attention ({display}: buildpack {} is not enabled)",
                entry.name
            )),
            Some(installed) if !installed.matches_version(version, policy) => {
                usage.messages.push(format!(
                    "needs attention ({display}: installed buildpack is {})",
                    installed.filename()
                ));
            }
            Some(_) => {}
        }

        usage.buildpacks.push(display);
    }

    if usage.buildpacks.is_empty() {
        if let Some(legacy) = app.legacy_buildpack() {
            usage.buildpacks.push(legacy.to_string());
        }
    }

    if usage.messages.is_empty() {
        usage.messages.push(OK.to_string());
    }

    usage
}
