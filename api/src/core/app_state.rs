use std::sync::Arc;

use collector_client::{CollectorClient, CollectorConfig, ReviewCollector};
use search_orchestrator::{OrchestratorConfig, SearchOrchestrator};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one search session served by this process.
    pub orchestrator: Arc<SearchOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Load shared state from environment variables.
    ///
    /// Reads `COLLECTOR_URL`/`COLLECTOR_PORT`, `COLLECTOR_TIMEOUT_SECS`,
    /// `DEMO_DELAY_MS` and `DEMO_MODE`.
    pub fn from_env() -> Result<Self, AppError> {
        let client = CollectorClient::new(CollectorConfig::from_env()?)?;
        let orchestrator_cfg = OrchestratorConfig::from_env()?;

        let collector: Arc<dyn ReviewCollector> = Arc::new(client);
        Ok(Self::new(Arc::new(SearchOrchestrator::new(
            collector,
            orchestrator_cfg,
        ))))
    }
}
