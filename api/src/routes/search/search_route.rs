use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument};

use crate::{
    core::{
        app_state::AppState,
        http::response_envelope::{ApiErrorDetail, ApiResponse},
    },
    routes::search::{search_request::SearchRequest, search_response::SearchResponse},
};

/// Starts a search for `query` and returns `202 Accepted` right away.
///
/// The session state is already reset to loading when this responds; poll
/// `/api/state` or `/api/dashboard` for the outcome. A newer search makes
/// any earlier one in flight irrelevant.
#[instrument(name = "search_route", skip(state, body))]
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Response {
    let query = body.query.trim();
    if query.is_empty() {
        let details = vec![ApiErrorDetail::field(
            "query",
            "Enter a product name, e.g. \"iPhone 15\".",
        )];
        return ApiResponse::<()>::error("BAD_REQUEST", "Search query must not be blank.", details)
            .into_response_with_status(StatusCode::BAD_REQUEST);
    }

    // detached; the orchestrator publishes the outcome into the session
    let (_task, is_demo_mode) = state.orchestrator.spawn_search(query).await;

    info!(query, is_demo_mode, "search accepted");

    ApiResponse::success(SearchResponse {
        message: "Search started".to_string(),
        query: query.to_string(),
        is_demo_mode,
    })
    .into_response_with_status(StatusCode::ACCEPTED)
}
