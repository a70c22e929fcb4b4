//! The `/v2` resource envelope shared by every entity kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A `/v2` resource: common metadata plus an entity-specific body.
///
/// Each entity kind decodes into its own narrow `entity` shape, so fields
/// that only make sense for one kind never show up on another.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>", serialize = "E: Serialize"))]
pub struct Resource<E> {
    /// Identity and timestamps.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// Entity-specific fields.
    pub entity: E,
}

impl<E> Resource<E> {
    /// The resource GUID.
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }
}

/// Resource metadata.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource GUID.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub guid: String,

    /// Link to the resource itself.
    #[serde(default)]
    pub url: Option<String>,

    /// When the resource was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the resource was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
