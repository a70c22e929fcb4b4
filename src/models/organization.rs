//! Organization model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::CfClient;
use crate::models::resource::Resource;
use crate::models::role::Role;
use crate::models::space::Space;
use crate::pagination::Pager;
use crate::traits::List;

/// A Cloud Foundry organization, the top-level tenant boundary.
pub type Organization = Resource<OrganizationEntity>;

/// Organization fields returned by `/v2/organizations`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationEntity {
    /// Organization name.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Link to the organization's spaces.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub spaces_url: String,

    /// Link to users holding the OrgUser role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub users_url: String,

    /// Link to users holding the OrgManager role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub managers_url: String,

    /// Link to users holding the OrgBillingManager role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub billing_managers_url: String,

    /// Link to users holding the OrgAuditor role.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub auditors_url: String,
}

impl Organization {
    /// Organization name.
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// The user collection link for an organization role.
    ///
    /// Returns `None` for space roles.
    pub fn role_url(&self, role: Role) -> Option<&str> {
        let url = match role {
            Role::OrgUser => &self.entity.users_url,
            Role::OrgManager => &self.entity.managers_url,
            Role::OrgBillingManager => &self.entity.billing_managers_url,
            Role::OrgAuditor => &self.entity.auditors_url,
            _ => return None,
        };
        Some(url.as_str())
    }

    /// The `(role, users link)` table walked for this organization, in
    /// report order.
    pub fn role_collections(&self, include_org_users: bool) -> Vec<(Role, &str)> {
        Role::ORG
            .into_iter()
            .filter(|role| include_org_users || *role != Role::OrgUser)
            .filter_map(|role| self.role_url(role).map(|url| (role, url)))
            .collect()
    }

    /// Walk the organization's spaces.
    pub fn spaces<'c>(&self, client: &'c CfClient) -> Pager<'c, Space> {
        Pager::new(client, &self.entity.spaces_url)
    }
}

impl List for Organization {
    const COLLECTION_PATH: &'static str = "/v2/organizations";
}
