//! Structured logging setup.
//!
//! Logs always go to stderr so JSON written to stdout stays parseable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Check a filter directive up front so a typo is reported instead of dropped.
pub fn parse_directive(directive: &str) -> Result<String, String> {
    EnvFilter::try_new(directive)
        .map(|_| directive.to_string())
        .map_err(|e| format!("invalid log filter '{}': {}", directive, e))
}

/// Build the filter from an explicit directive, then `RUST_LOG`, then the default.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: Option<&str>) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init();
}
