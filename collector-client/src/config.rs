//! Collector endpoint configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! - `COLLECTOR_URL` or `COLLECTOR_PORT` = endpoint (one is mandatory)
//! - `COLLECTOR_TIMEOUT_SECS`            = optional per-request timeout (u64)

use crate::error_handler::{
    CollectorError, ConfigError, env_opt, parse_opt_u64, validate_http_endpoint,
};

/// Timeout used when `COLLECTOR_TIMEOUT_SECS` is not set. Scrapes drive a
/// headless browser upstream, so this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the review collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Base URL, e.g. `http://localhost:5000` (no trailing slash needed).
    pub endpoint: String,
    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl CollectorConfig {
    /// Config for `endpoint` with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads the config from the process environment.
    ///
    /// # Errors
    /// See [`CollectorConfig::from_vars`].
    pub fn from_env() -> Result<Self, CollectorError> {
        Self::from_vars(
            env_opt("COLLECTOR_URL").as_deref(),
            env_opt("COLLECTOR_PORT").as_deref(),
            env_opt("COLLECTOR_TIMEOUT_SECS").as_deref(),
        )
    }

    /// Resolves the config from raw variable values.
    ///
    /// Precedence for the endpoint:
    /// 1. `url` if present
    /// 2. `port` → `http://localhost:{port}`
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingVar`] if both are missing
    /// - [`ConfigError::InvalidNumber`] if the port or timeout is invalid
    /// - [`ConfigError::InvalidFormat`] if the URL has no http(s) scheme
    pub fn from_vars(
        url: Option<&str>,
        port: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, CollectorError> {
        let endpoint = match (url, port) {
            (Some(url), _) => {
                validate_http_endpoint("COLLECTOR_URL", url)?;
                url.trim().trim_end_matches('/').to_string()
            }
            (None, Some(port)) => {
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: "COLLECTOR_PORT",
                        reason: "expected u16 (1..=65535)",
                    })?;
                format!("http://localhost:{port}")
            }
            (None, None) => {
                return Err(ConfigError::MissingVar("COLLECTOR_URL or COLLECTOR_PORT").into());
            }
        };

        let timeout_secs =
            parse_opt_u64("COLLECTOR_TIMEOUT_SECS", timeout_secs)?.or(Some(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            endpoint,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_wins_over_port_and_is_trimmed() {
        let cfg =
            CollectorConfig::from_vars(Some("http://collector:5000/"), Some("7000"), None).unwrap();
        assert_eq!(cfg.endpoint, "http://collector:5000");
        assert_eq!(cfg.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn port_falls_back_to_localhost() {
        let cfg = CollectorConfig::from_vars(None, Some("5000"), Some("5")).unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:5000");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn missing_endpoint_is_reported() {
        let err = CollectorConfig::from_vars(None, None, None).unwrap_err();
        assert!(matches!(
            err,
            CollectorError::Config(ConfigError::MissingVar(_))
        ));
    }

    #[test]
    fn bad_values_are_typed_errors() {
        assert!(matches!(
            CollectorConfig::from_vars(None, Some("99999"), None),
            Err(CollectorError::Config(ConfigError::InvalidNumber { var: "COLLECTOR_PORT", .. }))
        ));
        assert!(matches!(
            CollectorConfig::from_vars(Some("collector:5000"), None, None),
            Err(CollectorError::Config(ConfigError::InvalidFormat { .. }))
        ));
        assert!(matches!(
            CollectorConfig::from_vars(None, Some("5000"), Some("ten")),
            Err(CollectorError::Config(ConfigError::InvalidNumber { var: "COLLECTOR_TIMEOUT_SECS", .. }))
        ));
    }
}
