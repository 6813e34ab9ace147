use collector_client::ConnectivityStatus;
use search_orchestrator::Phase;
use serde::Serialize;

/// Result of `GET /api/connectivity`.
#[derive(Debug, Serialize)]
pub struct ConnectivityResponse {
    /// Status line to render, e.g. "Backend Offline".
    pub status: String,
    pub is_demo_mode: bool,
    pub phase: Phase,
    /// Raw probe result; absent when demo mode skipped the probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<ConnectivityStatus>,
}
