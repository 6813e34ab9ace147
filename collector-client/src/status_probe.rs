//! Resilient connectivity probe for the review collector.
//!
//! [`probe`] never fails: transport errors and non-2xx answers are mapped to
//! `ConnectivityStatus { online: false, .. }`, which is what a session start
//! needs to decide between live and demo mode. The strict variant is
//! [`crate::CollectorClient::try_status`].

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::collector::ReviewCollector;

/// Result of one connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityStatus {
    /// Whether the collector answered with 2xx.
    pub online: bool,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Message reported by the collector, or the failure reason.
    pub message: String,
    /// Measured probe latency in milliseconds.
    pub latency_ms: u128,
}

impl ConnectivityStatus {
    #[inline]
    fn online(endpoint: &str, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            online: true,
            endpoint: endpoint.to_string(),
            message: message.into(),
            latency_ms,
        }
    }

    #[inline]
    fn offline(endpoint: &str, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            online: false,
            endpoint: endpoint.to_string(),
            message: message.into(),
            latency_ms,
        }
    }
}

/// Probes `collector` once.
pub async fn probe(collector: &dyn ReviewCollector) -> ConnectivityStatus {
    let endpoint = collector.endpoint();
    let start = Instant::now();

    match collector.status().await {
        Ok(message) => {
            let status =
                ConnectivityStatus::online(endpoint, start.elapsed().as_millis(), message);
            info!(
                endpoint = %status.endpoint,
                latency_ms = status.latency_ms,
                message = %status.message,
                "collector probe completed"
            );
            status
        }
        Err(err) => {
            let status =
                ConnectivityStatus::offline(endpoint, start.elapsed().as_millis(), err.to_string());
            warn!(
                endpoint = %status.endpoint,
                latency_ms = status.latency_ms,
                message = %status.message,
                "collector probe failed"
            );
            status
        }
    }
}
