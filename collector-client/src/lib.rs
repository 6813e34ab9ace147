//! Client for the remote review collector.
//!
//! The collector scrapes marketplaces, scores sentiment and stores every
//! review it has ever seen. This crate talks to it over three endpoints:
//! - `GET  /api/status` : liveness probe
//! - `POST /api/scrape` : trigger a scrape for a query
//! - `GET  /api/data`   : fetch all stored records (unscoped)
//!
//! [`ReviewCollector`] is the seam consumers depend on; [`CollectorClient`]
//! is the reqwest-backed implementation.

pub mod client;
pub mod collector;
pub mod config;
pub mod error_handler;
pub mod status_probe;

pub use client::{CollectorClient, ScrapeReceipt};
pub use collector::{CollectorFuture, ReviewCollector};
pub use config::CollectorConfig;
pub use error_handler::{CollectorError, ConfigError, Result};
pub use status_probe::{ConnectivityStatus, probe};

pub use reqwest::StatusCode;
