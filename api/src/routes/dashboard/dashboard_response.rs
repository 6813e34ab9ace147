use review_analytics::DashboardView;
use search_orchestrator::SessionView;
use serde::Serialize;

/// Session plus the aggregates computed over its published results.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub session: SessionView,
    pub dashboard: DashboardView,
}
