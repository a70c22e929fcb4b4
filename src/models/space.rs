//! Space model.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::CfClient;
use crate::models::app::App;
use crate::models::resource::Resource;
use crate::models::role::Role;
use crate::pagination::Pager;

/// A deployment environment nested under an organization.
pub type Space = Resource<SpaceEntity>;

/// Space fields returned by `/v2/organizations/:guid/spaces`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceEntity {
    /// Space name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Link to users holding the SpaceDeveloper role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub developers_url: String,

    /// Link to users holding the SpaceManager role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub managers_url: String,

    /// Link to users holding the SpaceAuditor role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub auditors_url: String,

    /// Link to the space's applications.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub apps_url: String,
}

impl Space {
    /// Space name.
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// The user collection link for a space role.
    ///
    /// Returns `None` for organization roles.
    pub fn role_url(&self, role: Role) -> Option<&str> {
        let url = match role {
            Role::SpaceDeveloper => &self.entity.developers_url,
            Role::SpaceManager => &self.entity.managers_url,
            Role::SpaceAuditor => &self.entity.auditors_url,
            _ => return None,
        };
        Some(url.as_str())
    }

    /// The `(role, users link)` table walked for this space, in report order.
    pub fn role_collections(&self) -> Vec<(Role, &str)> {
        Role::SPACE
            .into_iter()
            .filter_map(|role| self.role_url(role).map(|url| (role, url)))
            .collect()
    }

    /// Walk the applications deployed in this space.
    pub fn apps<'c>(&self, client: &'c CfClient) -> Pager<'c, App> {
        Pager::new(client, &self.entity.apps_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_role_order() {
        let space: Space = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "space-1" },
            "entity": {
                "name": "prod",
                "developers_url": "/v2/spaces/space-1/developers",
                "managers_url": "/v2/spaces/space-1/managers",
                "auditors_url": "/v2/spaces/space-1/auditors",
                "apps_url": "/v2/spaces/space-1/apps"
            }
        }))
        .unwrap();

        let roles = space.role_collections();
        assert_eq!(roles.len(), 3);
        assert_eq!(roles[0].0, Role::SpaceDeveloper);
        assert_eq!(roles[1].0, Role::SpaceManager);
        assert_eq!(roles[2], (Role::SpaceAuditor, "/v2/spaces/space-1/auditors"));
        assert_eq!(space.name(), "prod");
    }

    #[test]
    fn test_null_links_decode_as_empty() {
        let space: Space = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "space-1" },
            "entity": { "name": null, "apps_url": null, "developers_url": null }
        }))
        .unwrap();

        assert_eq!(space.name(), "");
        assert_eq!(space.entity.apps_url, "");
        assert!(space.role_url(Role::OrgManager).is_none());
    }
}
