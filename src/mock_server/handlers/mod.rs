//! HTTP request handlers for the mock server.

pub mod buildpacks;
pub mod droplets;
pub mod organizations;
pub mod spaces;

pub use buildpacks::*;
pub use droplets::*;
pub use organizations::*;
pub use spaces::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::Page;

/// Pagination parameters accepted by every `/v2` collection.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    #[serde(rename = "results-per-page")]
    pub results_per_page: Option<usize>,
}

/// Cut one page out of `items`, linking to its neighbours under `path`.
pub fn paginate<T: Clone>(
    items: &[T],
    path: &str,
    query: &PageQuery,
    default_size: usize,
) -> Page<T> {
    let per_page = query.results_per_page.unwrap_or(default_size).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);

    let link =
        |p: usize| format!("{path}?order-direction=asc&page={p}&results-per-page={per_page}");

    Page {
        total_results: Some(items.len() as u64),
        total_pages: Some(total_pages as u32),
        prev_url: (page > 1).then(|| link(page - 1)),
        next_url: (page < total_pages).then(|| link(page + 1)),
        resources: items
            .iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect(),
    }
}

/// A Cloud Controller style 404.
pub fn not_found(description: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "description": description,
            "error_code": "CF-NotFound",
            "code": 10000
        })),
    )
        .into_response()
}
