use review_analytics::DashboardView;
use search_orchestrator::{SearchOutcome, SessionView};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// Outcome of the on-load replay; `null` when it did not fire.
    pub replayed: Option<SearchOutcome>,
    pub session: SessionView,
    pub dashboard: DashboardView,
}
