use std::{future::Future, pin::Pin};

use review_analytics::ReviewRecord;

use crate::client::ScrapeReceipt;
use crate::error_handler::Result;

/// Boxed future returned by [`ReviewCollector`] calls.
pub type CollectorFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Interface to a review collection backend.
///
/// Implement this trait to plug in another transport or an in-memory fake.
/// Each call is an independent request/response exchange; implementations
/// must not hold connections open between calls.
pub trait ReviewCollector: Send + Sync {
    /// Base endpoint, for logs and status reports.
    fn endpoint(&self) -> &str;

    /// Liveness probe. Returns the status message the backend reported
    /// (may be empty).
    fn status<'a>(&'a self) -> CollectorFuture<'a, String>;

    /// Asks the backend to scrape and score reviews for `query`.
    fn trigger_scrape<'a>(&'a self, query: &'a str) -> CollectorFuture<'a, ScrapeReceipt>;

    /// Every stored record, unscoped by query.
    fn fetch_all<'a>(&'a self) -> CollectorFuture<'a, Vec<ReviewRecord>>;
}
