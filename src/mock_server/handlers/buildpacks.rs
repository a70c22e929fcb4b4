//! Buildpack endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use super::{paginate, PageQuery};
use crate::mock_server::state::MockState;

/// GET /v2/buildpacks
pub async fn list_buildpacks(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    Json(paginate(
        &state.buildpacks,
        "/v2/buildpacks",
        &query,
        state.results_per_page,
    ))
}
