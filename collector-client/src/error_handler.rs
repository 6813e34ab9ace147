//! Unified error handling for `collector-client`.
//!
//! This module exposes a single top-level error type [`CollectorError`] for
//! the whole library and groups config problems in [`ConfigError`]. Small
//! helpers for reading/validating environment variables return the unified
//! [`Result<T>`] alias.
//!
//! All messages include the suffix `[Collector]` to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Max characters of an upstream body kept for logs and errors.
const SNIPPET_LEN: usize = 240;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `collector-client` crate.
///
/// One variant per way a collector call can go wrong. The rejected-call
/// variants keep the HTTP status so callers can decide what to surface.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connect/DNS/reset or other client-side failure.
    #[error("[Collector] transport error: {0}")]
    Transport(reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("[Collector] request to {0} timed out")]
    Timeout(String),

    /// `/api/status` answered with a non-2xx status.
    #[error("[Collector] status probe got HTTP {status}: {snippet}")]
    StatusRejected { status: StatusCode, snippet: String },

    /// `/api/scrape` answered with a non-2xx status.
    ///
    /// `message` is the collector's `{"error": ..}` text when it sent one.
    #[error("[Collector] scrape rejected with HTTP {status}: {}", message.as_deref().unwrap_or("no reason given"))]
    ScrapeRejected {
        status: StatusCode,
        message: Option<String>,
    },

    /// `/api/data` answered with a non-2xx status.
    #[error("[Collector] fetch failed with HTTP {status}: {snippet}")]
    FetchRejected { status: StatusCode, snippet: String },

    /// Response payload could not be decoded as expected.
    #[error("[Collector] decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CollectorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            return CollectorError::Timeout(url);
        }
        if e.is_decode() {
            return CollectorError::Decode(e.to_string());
        }
        CollectorError::Transport(e)
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Collector] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (ports, timeouts, delays).
    #[error("[Collector] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `COLLECTOR_PORT`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Collector] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `COLLECTOR_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Reads an environment variable, treating unset and blank the same.
pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an optional `u64` value (`Ok(None)` if absent).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the value is present but not a
/// valid `u64`.
pub fn parse_opt_u64(
    var: &'static str,
    raw: Option<&str>,
) -> std::result::Result<Option<u64>, ConfigError> {
    match raw {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                var,
                reason: "expected u64",
            }),
        None => Ok(None),
    }
}

/// Whether a flag value is truthy (`1`, `true`, `yes`, `on`).
pub fn is_truthy(raw: Option<&str>) -> bool {
    raw.map(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
    .unwrap_or(false)
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`CollectorError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims an upstream body to a short single-line snippet for logs.
pub fn make_snippet(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    flat.chars().take(SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_is_flattened_and_bounded() {
        let body = format!("line one\n\n  line two {}", "x".repeat(500));
        let s = make_snippet(&body);
        assert!(s.starts_with("line one line two"));
        assert_eq!(s.chars().count(), SNIPPET_LEN);
    }

    #[test]
    fn optional_numbers_parse_or_fail_typed() {
        assert_eq!(parse_opt_u64("X", None).unwrap(), None);
        assert_eq!(parse_opt_u64("X", Some(" 15 ")).unwrap(), Some(15));
        assert!(matches!(
            parse_opt_u64("X", Some("soon")),
            Err(ConfigError::InvalidNumber { var: "X", .. })
        ));
    }

    #[test]
    fn truthy_flags() {
        assert!(is_truthy(Some("TRUE")));
        assert!(is_truthy(Some(" 1 ")));
        assert!(!is_truthy(Some("off")));
        assert!(!is_truthy(None));
    }

    #[test]
    fn endpoint_scheme_is_checked() {
        assert!(validate_http_endpoint("COLLECTOR_URL", "http://localhost:5000").is_ok());
        assert!(validate_http_endpoint("COLLECTOR_URL", " https://collector.internal").is_ok());
        let err = validate_http_endpoint("COLLECTOR_URL", "localhost:5000").unwrap_err();
        assert!(matches!(
            err,
            CollectorError::Config(ConfigError::InvalidFormat { var: "COLLECTOR_URL", .. })
        ));
    }

    #[test]
    fn scrape_rejection_display_includes_reason() {
        let err = CollectorError::ScrapeRejected {
            status: StatusCode::BAD_REQUEST,
            message: Some("Query parameter missing".into()),
        };
        assert!(err.to_string().contains("Query parameter missing"));
    }
}
