use std::sync::Arc;

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::analysis::{analysis_request::AnalysisParams, analysis_response::AnalysisResponse},
};

/// Opens the analysis page for the address query `q`.
///
/// A fresh page load with `q` runs that search once and waits for it; later
/// loads with the same `q` only read the dashboard.
#[instrument(name = "analysis_route", skip(state, params))]
pub async fn analysis_route(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AnalysisParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;

    let replayed = state
        .orchestrator
        .apply_query_on_load(params.q.as_deref())
        .await;
    if let Some(outcome) = &replayed {
        info!(q = ?params.q, ?outcome, "query replayed from address");
    }

    let (session, dashboard) = state.orchestrator.dashboard_view().await;
    Ok(ApiResponse::success(AnalysisResponse {
        replayed,
        session,
        dashboard,
    })
    .into_response_with_status(StatusCode::OK))
}
