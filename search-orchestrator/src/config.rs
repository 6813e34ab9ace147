//! Orchestrator settings from environment variables.
//!
//! - `DEMO_DELAY_MS` = artificial latency before demo results publish (default 1500)
//! - `DEMO_MODE`     = start the session in demo mode (`true`/`1`), skipping the probe

use std::time::Duration;

use collector_client::ConfigError;
use collector_client::error_handler::{env_opt, is_truthy, parse_opt_u64};

/// Default artificial latency for demo searches.
pub const DEFAULT_DEMO_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Scheduling delay before demo results are published. Lets the view
    /// exercise its loading state without a backend.
    pub demo_delay: Duration,
    /// Session starts with demo mode on.
    pub start_in_demo_mode: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            demo_delay: DEFAULT_DEMO_DELAY,
            start_in_demo_mode: false,
        }
    }
}

impl OrchestratorConfig {
    /// Loads the config from the process environment.
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] if `DEMO_DELAY_MS` is not a `u64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env_opt("DEMO_DELAY_MS").as_deref(),
            env_opt("DEMO_MODE").as_deref(),
        )
    }

    pub fn from_vars(delay_ms: Option<&str>, demo_mode: Option<&str>) -> Result<Self, ConfigError> {
        let demo_delay = parse_opt_u64("DEMO_DELAY_MS", delay_ms)?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEMO_DELAY);

        Ok(Self {
            demo_delay,
            start_in_demo_mode: is_truthy(demo_mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(
            OrchestratorConfig::from_vars(None, None).unwrap(),
            OrchestratorConfig::default()
        );
    }

    #[test]
    fn values_are_parsed() {
        let cfg = OrchestratorConfig::from_vars(Some("20"), Some("true")).unwrap();
        assert_eq!(cfg.demo_delay, Duration::from_millis(20));
        assert!(cfg.start_in_demo_mode);
        assert!(OrchestratorConfig::from_vars(Some("later"), None).is_err());
    }
}
