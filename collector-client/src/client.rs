//! Thin reqwest client for the review collector.
//!
//! - `GET  {endpoint}/api/status` : liveness probe
//! - `POST {endpoint}/api/scrape` : scrape trigger (`{"query": ..}`)
//! - `GET  {endpoint}/api/data`   : all stored records
//!
//! # Examples
//!
//! ```no_run
//! use collector_client::{CollectorClient, CollectorConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CollectorClient::new(CollectorConfig::new("http://localhost:5000"))?;
//!
//! client.trigger_scrape("iPhone 15").await?;
//! let rows = client.fetch_all().await?;
//! println!("collector holds {} reviews", rows.len());
//! # Ok(()) }
//! ```

use std::time::Duration;

use review_analytics::ReviewRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use crate::collector::{CollectorFuture, ReviewCollector};
use crate::config::{CollectorConfig, DEFAULT_TIMEOUT_SECS};
use crate::error_handler::{CollectorError, Result, make_snippet, validate_http_endpoint};

/// Acknowledgement of an accepted scrape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeReceipt {
    #[serde(default)]
    pub message: Option<String>,
    /// Number of new reviews the collector stored.
    #[serde(default)]
    pub items_added: Option<u64>,
}

/// Reqwest-backed [`ReviewCollector`].
///
/// Reuses one HTTP client with the configured timeout for all calls.
#[derive(Debug, Clone)]
pub struct CollectorClient {
    client: reqwest::Client,
    cfg: CollectorConfig,
    url_status: String,
    url_scrape: String,
    url_data: String,
}

impl CollectorClient {
    /// Creates a new client from the given config.
    ///
    /// # Errors
    /// - [`CollectorError::Config`] if `cfg.endpoint` is not an http(s) URL
    /// - [`CollectorError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: CollectorConfig) -> Result<Self> {
        validate_http_endpoint("COLLECTOR_URL", &cfg.endpoint)?;

        let timeout = Duration::from_secs(cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("sentiment-dashboard/0.1")
            .build()?;

        let base = cfg.endpoint.trim().trim_end_matches('/').to_string();
        let url_status = format!("{base}/api/status");
        let url_scrape = format!("{base}/api/scrape");
        let url_data = format!("{base}/api/data");

        debug!(endpoint = %base, timeout_secs = timeout.as_secs(), "collector client initialized");

        Ok(Self {
            client,
            cfg,
            url_status,
            url_scrape,
            url_data,
        })
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.cfg
    }

    /// Strict liveness probe. Returns an error on hard failures.
    ///
    /// A 2xx only counts when the body is the collector's JSON status reply;
    /// a missing `message` yields an empty string.
    ///
    /// # Errors
    /// - [`CollectorError::StatusRejected`] for non-2xx responses
    /// - [`CollectorError::Decode`] for a 2xx body that is not a status reply
    /// - [`CollectorError::Transport`] / [`CollectorError::Timeout`] for client errors
    #[instrument(skip_all, fields(endpoint = %self.cfg.endpoint))]
    pub async fn try_status(&self) -> Result<String> {
        debug!("GET {}", self.url_status);
        let resp = self.client.get(&self.url_status).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            error!(url = %self.url_status, %status, %snippet, "status probe returned non-success status");
            return Err(CollectorError::StatusRejected { status, snippet });
        }

        #[derive(Deserialize)]
        struct StatusReply {
            message: Option<String>,
        }

        let text = resp.text().await?;
        match serde_json::from_str::<StatusReply>(&text) {
            Ok(reply) => Ok(reply.message.unwrap_or_default()),
            Err(e) => {
                warn!(error = %e, snippet = %make_snippet(&text), "/api/status body is not a status reply");
                Err(CollectorError::Decode(format!("unexpected /api/status body: {e}")))
            }
        }
    }

    /// Triggers a scrape for `query`.
    ///
    /// # Errors
    /// - [`CollectorError::ScrapeRejected`] for non-2xx responses, carrying
    ///   the collector's `error` text when present
    /// - [`CollectorError::Transport`] / [`CollectorError::Timeout`] for client errors
    #[instrument(skip(self))]
    pub async fn trigger_scrape(&self, query: &str) -> Result<ScrapeReceipt> {
        #[derive(Serialize)]
        struct ScrapeRequest<'a> {
            query: &'a str,
        }

        debug!("POST {}", self.url_scrape);
        let resp = self
            .client
            .post(&self.url_scrape)
            .json(&ScrapeRequest { query })
            .send()
            .await?;

        if !resp.status().is_success() {
            #[derive(Deserialize)]
            struct ErrorReply {
                error: Option<String>,
            }

            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorReply>(&text)
                .ok()
                .and_then(|r| r.error)
                .filter(|m| !m.trim().is_empty());

            error!(url = %self.url_scrape, %status, snippet = %make_snippet(&text), "scrape rejected");
            return Err(CollectorError::ScrapeRejected { status, message });
        }

        let text = resp.text().await?;
        let receipt = serde_json::from_str::<ScrapeReceipt>(&text).unwrap_or_else(|e| {
            warn!(error = %e, "unexpected /api/scrape body; scrape still accepted");
            ScrapeReceipt::default()
        });
        debug!(items_added = ?receipt.items_added, "scrape accepted");
        Ok(receipt)
    }

    /// Fetches every stored record.
    ///
    /// # Errors
    /// - [`CollectorError::FetchRejected`] for non-2xx responses
    /// - [`CollectorError::Decode`] if the body is not a list of records
    /// - [`CollectorError::Transport`] / [`CollectorError::Timeout`] for client errors
    #[instrument(skip_all)]
    pub async fn fetch_all(&self) -> Result<Vec<ReviewRecord>> {
        debug!("GET {}", self.url_data);
        let resp = self.client.get(&self.url_data).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            error!(url = %self.url_data, %status, %snippet, "fetch returned non-success status");
            return Err(CollectorError::FetchRejected { status, snippet });
        }

        let rows: Vec<ReviewRecord> = resp
            .json()
            .await
            .map_err(|e| CollectorError::Decode(format!("expected an array of reviews: {e}")))?;
        debug!(count = rows.len(), "records fetched");
        Ok(rows)
    }
}

impl ReviewCollector for CollectorClient {
    fn endpoint(&self) -> &str {
        &self.cfg.endpoint
    }

    fn status<'a>(&'a self) -> CollectorFuture<'a, String> {
        Box::pin(self.try_status())
    }

    fn trigger_scrape<'a>(&'a self, query: &'a str) -> CollectorFuture<'a, ScrapeReceipt> {
        Box::pin(CollectorClient::trigger_scrape(self, query))
    }

    fn fetch_all<'a>(&'a self) -> CollectorFuture<'a, Vec<ReviewRecord>> {
        Box::pin(CollectorClient::fetch_all(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::StatusCode,
        routing::{get, post},
    };
    use review_analytics::Sentiment;
    use serde_json::{Value, json};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// An address nothing listens on.
    async fn dead_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn client(endpoint: String) -> CollectorClient {
        CollectorClient::new(CollectorConfig {
            endpoint,
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn rejects_endpoint_without_scheme() {
        let err = CollectorClient::new(CollectorConfig::new("localhost:5000")).unwrap_err();
        assert!(matches!(err, CollectorError::Config(_)));
    }

    #[tokio::test]
    async fn status_returns_reported_message() {
        let app = Router::new().route(
            "/api/status",
            get(|| async { Json(json!({"message": "Backend is live and connected!"})) }),
        );
        let c = client(serve(app).await);
        assert_eq!(c.try_status().await.unwrap(), "Backend is live and connected!");
    }

    #[tokio::test]
    async fn status_non_success_is_rejected() {
        let app = Router::new().route(
            "/api/status",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let c = client(serve(app).await);
        match c.try_status().await {
            Err(CollectorError::StatusRejected { status, snippet }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(snippet, "maintenance");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn status_with_non_json_body_is_a_decode_error() {
        let app = Router::new().route(
            "/api/status",
            get(|| async { "<html>captive portal</html>" }),
        );
        let c = client(serve(app).await);
        assert!(matches!(
            c.try_status().await,
            Err(CollectorError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn status_transport_failure_is_an_error() {
        let c = client(dead_endpoint().await);
        assert!(matches!(
            c.try_status().await,
            Err(CollectorError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn scrape_sends_query_and_reads_receipt() {
        let app = Router::new().route(
            "/api/scrape",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["query"], "iPhone 15");
                Json(json!({"message": "Scrape completed successfully", "items_added": 12}))
            }),
        );
        let c = client(serve(app).await);
        let receipt = c.trigger_scrape("iPhone 15").await.unwrap();
        assert_eq!(receipt.items_added, Some(12));
    }

    #[tokio::test]
    async fn scrape_rejection_carries_server_message() {
        let app = Router::new().route(
            "/api/scrape",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "chromedriver not found"})),
                )
            }),
        );
        let c = client(serve(app).await);
        match c.trigger_scrape("x").await {
            Err(CollectorError::ScrapeRejected { status, message }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message.as_deref(), Some("chromedriver not found"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn scrape_rejection_without_json_has_no_message() {
        let app = Router::new().route(
            "/api/scrape",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
        );
        let c = client(serve(app).await);
        assert!(matches!(
            c.trigger_scrape("x").await,
            Err(CollectorError::ScrapeRejected { message: None, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_decodes_rows() {
        let app = Router::new().route(
            "/api/data",
            get(|| async {
                Json(json!([
                    {"product": "iPhone 15", "review": "great", "sentiment": "Positive", "score": 0.8, "source": "Amazon"},
                    {"product": "Galaxy", "review": "meh", "sentiment": "Neutral", "score": null, "source": null}
                ]))
            }),
        );
        let c = client(serve(app).await);
        let rows = c.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sentiment, Sentiment::Positive);
        assert_eq!(rows[1].score.value(), 0.0);
    }

    #[tokio::test]
    async fn fetch_non_success_and_bad_body() {
        let failing = Router::new().route(
            "/api/data",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Database connection failed"})),
                )
            }),
        );
        let c = client(serve(failing).await);
        assert!(matches!(
            c.fetch_all().await,
            Err(CollectorError::FetchRejected { .. })
        ));

        let garbled = Router::new().route(
            "/api/data",
            get(|| async { Json(json!({"message": "No data available"})) }),
        );
        let c = client(serve(garbled).await);
        assert!(matches!(c.fetch_all().await, Err(CollectorError::Decode(_))));
    }
}
