use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::demo_mode::demo_mode_response::DemoModeResponse,
};

/// Flips demo mode. Turning it off re-probes the collector, so the reply
/// may still say `is_demo_mode: true` when the backend is down.
#[instrument(name = "toggle_demo_mode_route", skip(state))]
pub async fn toggle_demo_mode_route(State(state): State<Arc<AppState>>) -> Response {
    let is_demo_mode = state.orchestrator.toggle_demo_mode().await;
    let status = state.orchestrator.status().await;

    ApiResponse::success(DemoModeResponse {
        is_demo_mode,
        status,
    })
    .into_response_with_status(StatusCode::OK)
}
