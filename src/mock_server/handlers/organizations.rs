//! Organization endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{not_found, paginate, PageQuery};
use crate::mock_server::state::{MockOrganization, MockSpace, MockState};
use crate::{Metadata, Organization, OrganizationEntity, Resource, Role, Space, SpaceEntity};

fn organization_resource(org: &MockOrganization) -> Organization {
    let base = format!("/v2/organizations/{}", org.guid);
    Resource {
        metadata: Metadata {
            guid: org.guid.clone(),
            url: Some(base.clone()),
            ..Default::default()
        },
        entity: OrganizationEntity {
            name: org.name.clone(),
            spaces_url: format!("{base}/spaces"),
            users_url: format!("{base}/users"),
            managers_url: format!("{base}/managers"),
            billing_managers_url: format!("{base}/billing_managers"),
            auditors_url: format!("{base}/auditors"),
        },
    }
}

fn space_resource(space: &MockSpace) -> Space {
    let base = format!("/v2/spaces/{}", space.guid);
    Resource {
        metadata: Metadata {
            guid: space.guid.clone(),
            url: Some(base.clone()),
            ..Default::default()
        },
        entity: SpaceEntity {
            name: space.name.clone(),
            developers_url: format!("{base}/developers"),
            managers_url: format!("{base}/managers"),
            auditors_url: format!("{base}/auditors"),
            apps_url: format!("{base}/apps"),
        },
    }
}

fn org_role(collection: &str) -> Option<Role> {
    match collection {
        "users" => Some(Role::OrgUser),
        "managers" => Some(Role::OrgManager),
        "billing_managers" => Some(Role::OrgBillingManager),
        "auditors" => Some(Role::OrgAuditor),
        _ => None,
    }
}

/// GET /v2/organizations
pub async fn list_organizations(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    let orgs: Vec<Organization> = state.organizations.iter().map(organization_resource).collect();
    Json(paginate(&orgs, "/v2/organizations", &query, state.results_per_page))
}

/// GET /v2/organizations/{guid}/{spaces|users|managers|billing_managers|auditors}
pub async fn organization_collection(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((guid, collection)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;

    let Some(org) = state.get_organization(&guid) else {
        return not_found(format!("The organization could not be found: {guid}"));
    };
    let path = format!("/v2/organizations/{guid}/{collection}");

    if collection == "spaces" {
        let spaces: Vec<Space> = org.spaces.iter().map(space_resource).collect();
        return Json(paginate(&spaces, &path, &query, state.results_per_page)).into_response();
    }

    match org_role(&collection) {
        Some(role) => {
            let users = org.roles.get(&role).cloned().unwrap_or_default();
            Json(paginate(&users, &path, &query, state.results_per_page)).into_response()
        }
        None => not_found(format!("Unknown request: {path}")),
    }
}
