use serde::Serialize;

/// Returned once a search has been accepted and started.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub message: String,
    /// Trimmed query the search runs for.
    pub query: String,
    /// Whether this search is served from demo data.
    pub is_demo_mode: bool,
}
