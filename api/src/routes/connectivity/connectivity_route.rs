use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::connectivity::connectivity_response::ConnectivityResponse,
};

/// Probes the collector and reports the resulting session mode.
///
/// Always 200: an unreachable collector is a valid answer (demo mode).
#[instrument(name = "connectivity_route", skip(state))]
pub async fn connectivity_route(State(state): State<Arc<AppState>>) -> Response {
    let probe = state.orchestrator.probe_connectivity().await;
    let view = state.orchestrator.session_view().await;

    info!(status = %view.status, is_demo_mode = view.state.is_demo_mode, "connectivity checked");

    ApiResponse::success(ConnectivityResponse {
        status: view.status,
        is_demo_mode: view.state.is_demo_mode,
        phase: view.phase,
        probe,
    })
    .into_response_with_status(StatusCode::OK)
}
