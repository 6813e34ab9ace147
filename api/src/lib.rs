//! HTTP surface of the sentiment dashboard.
//!
//! Exposes the search session to a view layer as JSON:
//! - `GET  /api/connectivity`      : probe the collector, pick live/demo mode
//! - `POST /api/search`            : start a search (202, runs in background)
//! - `POST /api/demo-mode/toggle`  : flip the sticky demo flag
//! - `GET  /api/state`             : current query state, status and phase
//! - `GET  /api/dashboard`         : aggregates for the current results
//! - `GET  /analysis?q=..`         : replay a query from the address, then the dashboard

use std::sync::Arc;

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use collector_client::error_handler::env_opt;
use tokio::signal;
use tracing::{error, info, warn};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use crate::middleware_layer::json_extractor::json_error_mapper;
use crate::routes::{
    analysis::analysis_route::analysis_route,
    connectivity::connectivity_route::connectivity_route,
    dashboard::dashboard_route::dashboard_route,
    demo_mode::demo_mode_route::toggle_demo_mode_route,
    search::search_route::search_route,
    state::state_route::state_route,
};

/// Builds the application router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/connectivity", get(connectivity_route))
        .route("/api/search", post(search_route))
        .route("/api/demo-mode/toggle", post(toggle_demo_mode_route))
        .route("/api/state", get(state_route))
        .route("/api/dashboard", get(dashboard_route))
        .route("/analysis", get(analysis_route))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Loads config from the environment, probes the collector once and serves
/// until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let host_url = env_opt("API_ADDRESS").ok_or(AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);

    match state.orchestrator.probe_connectivity().await {
        Some(report) if report.online => {
            info!(endpoint = %report.endpoint, latency_ms = report.latency_ms, "collector online")
        }
        Some(report) => {
            warn!(endpoint = %report.endpoint, "collector offline, serving demo data")
        }
        None => info!("demo mode requested, collector probe skipped"),
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "api listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("api stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        // serve until the process is killed
        std::future::pending::<()>().await;
    }
}
