//! Review analytics: turns a raw list of scored reviews into dashboard data.
//!
//! This crate provides pure functions to:
//! - Summarize a result set into headline metrics and a sentiment histogram
//! - Build a cumulative, time-ordered trend series
//! - Restrict an unscoped fetch to the records of the active query
//! - Synthesize query-scoped demo records when no backend is reachable
//!
//! Nothing here performs I/O. The design is flat and splits responsibilities
//! into focused modules.

mod aggregate;
mod demo;
mod model;
mod relevance;
mod report;
mod trend;

pub use aggregate::{Distribution, Metrics, distribution, summarize};
pub use demo::synthesize;
pub use model::{ReviewRecord, Score, Sentiment};
pub use relevance::filter_relevant;
pub use report::{AnalyticsReport, DashboardView, LabelCount};
pub use trend::{TREND_BUCKETS, TrendBucket, trend_series};
