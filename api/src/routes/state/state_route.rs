use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::{debug, instrument};

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Current query state, status line and phase.
#[instrument(name = "state_route", skip(state))]
pub async fn state_route(State(state): State<Arc<AppState>>) -> Response {
    let view = state.orchestrator.session_view().await;
    debug!(
        query = %view.state.query,
        is_loading = view.state.is_loading,
        results = view.state.results.len(),
        "state read"
    );
    ApiResponse::success(view).into_response_with_status(StatusCode::OK)
}
