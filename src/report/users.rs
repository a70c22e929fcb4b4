//! Organization and space membership report.

use serde::{Deserialize, Serialize};

use crate::client::CfClient;
use crate::error::Result;
use crate::models::{Organization, Role, Space, User};
use crate::pagination::walk;
use crate::traits::List;

/// Options for [`report_users`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UsersReportOptions {
    /// Also report the OrgUser role, which every org member holds.
    pub include_org_users: bool,
}

/// One user holding one role in an organization or space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleLineItem {
    /// Organization name.
    pub organization: String,
    /// Space name; `None` for organization roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    /// Username (or user GUID when the account has no username).
    pub username: String,
    /// Role held.
    pub role: Role,
}

/// Walk every organization and space and list who holds which role.
///
/// For each organization the org roles come first, then each space with its
/// developers, managers and auditors. Rows keep the order the API returns
/// them in.
///
/// # Errors
///
/// Any failed request aborts the whole report.
#[tracing::instrument(skip(client))]
pub async fn report_users(
    client: &CfClient,
    options: &UsersReportOptions,
) -> Result<Vec<UserRoleLineItem>> {
    let mut rows = Vec::new();

    let mut orgs = Organization::list(client);
    while let Some(org) = orgs.try_next().await? {
        collect_org_roles(client, &org, options, &mut rows).await?;

        let mut spaces = org.spaces(client);
        while let Some(space) = spaces.try_next().await? {
            collect_space_roles(client, &org, &space, &mut rows).await?;
        }
    }

    tracing::debug!(rows = rows.len(), "user report complete");
    Ok(rows)
}

async fn collect_org_roles(
    client: &CfClient,
    org: &Organization,
    options: &UsersReportOptions,
    rows: &mut Vec<UserRoleLineItem>,
) -> Result<()> {
    for (role, url) in org.role_collections(options.include_org_users) {
        walk(client, url, |user: User| {
            rows.push(UserRoleLineItem {
                organization: org.name().to_string(),
                space: None,
                username: user.display_name().to_string(),
                role,
            });
            Ok(())
        })
        .await?;
    }
    Ok(())
}

async fn collect_space_roles(
    client: &CfClient,
    org: &Organization,
    space: &Space,
    rows: &mut Vec<UserRoleLineItem>,
) -> Result<()> {
    for (role, url) in space.role_collections() {
        walk(client, url, |user: User| {
            rows.push(UserRoleLineItem {
                organization: org.name().to_string(),
                space: Some(space.name().to_string()),
                username: user.display_name().to_string(),
                role,
            });
            Ok(())
        })
        .await?;
    }
    Ok(())
}
