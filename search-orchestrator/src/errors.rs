//! Terminal failures of a single search attempt.

use collector_client::CollectorError;
use thiserror::Error;

/// Why a search ended without results.
///
/// `Display` is the exact text published as `QueryState::error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The scrape trigger was rejected; server text or a generic fallback.
    #[error("{0}")]
    Scrape(String),

    /// Reading the stored records after a scrape was rejected.
    #[error("Failed to fetch data")]
    Fetch,

    /// Anything else on the live path (connect, timeout, decode).
    #[error("{0}")]
    Transport(String),
}

impl SearchError {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SearchError::Transport("An error occurred.".to_string())
        } else {
            SearchError::Transport(message)
        }
    }
}

impl From<CollectorError> for SearchError {
    fn from(err: CollectorError) -> Self {
        match err {
            CollectorError::ScrapeRejected { message, .. } => {
                SearchError::Scrape(message.unwrap_or_else(|| "Scrape failed".to_string()))
            }
            CollectorError::FetchRejected { .. } => SearchError::Fetch,
            other => SearchError::transport(other.to_string()),
        }
    }
}
