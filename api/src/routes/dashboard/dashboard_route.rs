use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::dashboard::dashboard_response::DashboardResponse,
};

#[instrument(name = "dashboard_route", skip(state))]
pub async fn dashboard_route(State(state): State<Arc<AppState>>) -> Response {
    let (session, dashboard) = state.orchestrator.dashboard_view().await;
    ApiResponse::success(DashboardResponse { session, dashboard })
        .into_response_with_status(StatusCode::OK)
}
