//! Search orchestration for the review dashboard.
//!
//! One [`SearchOrchestrator`] owns the whole session: the connectivity
//! status, the sticky demo flag and the [`QueryState`] the view layer reads.
//! It decides per search whether to synthesize demo data or go through the
//! collector, and guarantees that a result from an overtaken search is
//! never published.

mod config;
mod errors;
mod orchestrator;
mod state;

pub use config::OrchestratorConfig;
pub use errors::SearchError;
pub use orchestrator::{SearchOrchestrator, SearchOutcome};
pub use state::{Phase, QueryState, SessionView};

/// Status text shown once the probe failed.
pub const STATUS_OFFLINE: &str = "Backend Offline";
/// Status text while demo mode is on.
pub const STATUS_DEMO: &str = "Demo Mode Active";
/// Status text before any probe ran.
pub const STATUS_DISCONNECTED: &str = "Disconnected";
/// Status text for a live collector that sent no message.
pub const STATUS_CONNECTED: &str = "Connected";
