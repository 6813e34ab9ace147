use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Workspace crates whose logs get a per-crate level directive.
pub const WORKSPACE_TARGETS: [&str; 5] = [
    "sentiment_dashboard",
    "api",
    "collector_client",
    "search_orchestrator",
    "review_analytics",
];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Compact single-line fmt layer with RFC3339 UTC timestamps.
///
/// Span close events are logged so `#[instrument]`ed handlers and client
/// calls report their duration. ANSI colors only when stdout is a terminal.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(
            fmt::format()
                .compact()
                .with_timer(ChronoRfc3339Utc)
                .with_level(true)
                .with_target(true),
        )
}

/// `RUST_LOG` if set and valid, else `default`; workspace crates are then
/// raised to `level`.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if std::env::var_os("RUST_LOG").is_some() {
        return filter;
    }
    for target in WORKSPACE_TARGETS {
        if let Some(directive) = level_directive(target, level) {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

fn level_directive(target: &str, level: Level) -> Option<Directive> {
    format!("{target}={}", level.as_str().to_lowercase()).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse_for_every_workspace_target() {
        for target in WORKSPACE_TARGETS {
            assert!(level_directive(target, Level::DEBUG).is_some(), "{target}");
        }
    }
}
