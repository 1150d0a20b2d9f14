use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Overrides the detected log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOGTALLY_LOG_FORMAT";

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Writes to stderr; stdout is reserved for reports
/// - JSON with flattened event fields when stderr is not a terminal, compact
///   human readable lines otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format() {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .without_time()
            .with_target(false)
            .init(),
    }
}

pub fn log_format() -> LogFormat {
    match std::env::var(LOG_FORMAT_ENV).ok().as_deref() {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => default_log_format(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}
