//! Space endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{not_found, paginate, PageQuery};
use crate::mock_server::state::MockState;
use crate::Role;

fn space_role(collection: &str) -> Option<Role> {
    match collection {
        "developers" => Some(Role::SpaceDeveloper),
        "managers" => Some(Role::SpaceManager),
        "auditors" => Some(Role::SpaceAuditor),
        _ => None,
    }
}

/// GET /v2/spaces/{guid}/{apps|developers|managers|auditors}
pub async fn space_collection(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((guid, collection)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;

    let Some(space) = state.get_space(&guid) else {
        return not_found(format!("The app space could not be found: {guid}"));
    };
    let path = format!("/v2/spaces/{guid}/{collection}");

    if collection == "apps" {
        return Json(paginate(&space.apps, &path, &query, state.results_per_page)).into_response();
    }

    match space_role(&collection) {
        Some(role) => {
            let users = space.roles.get(&role).cloned().unwrap_or_default();
            Json(paginate(&users, &path, &query, state.results_per_page)).into_response()
        }
        None => not_found(format!("Unknown request: {path}")),
    }
}
