//! Droplet endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::not_found;
use crate::mock_server::state::MockState;

/// GET /v3/apps/{guid}/droplets/current
pub async fn current_droplet(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(app_guid): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.get_droplet(&app_guid) {
        Some(droplet) => Json(droplet.clone()).into_response(),
        None => not_found("Droplet not found".to_string()),
    }
}
