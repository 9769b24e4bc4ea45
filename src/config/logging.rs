//! Logging setup
//!
//! Diagnostics go to stderr so they never interleave with the menu and
//! report tables printed on stdout.

use std::io::stderr;

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::error::BudgetError;

/// Parse a log level name (error, warn, info, debug, trace, off)
pub fn parse_log_level(level: &str) -> Result<LevelFilter, BudgetError> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        other => Err(BudgetError::Config(format!(
            "Invalid log level '{}' (expected error, warn, info, debug, trace or off)",
            other
        ))),
    }
}

/// Install the global stderr subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    if tracing_subscriber::registry()
        .with(terminal_log)
        .try_init()
        .is_err()
    {
        debug!("global subscriber already installed");
    }
}
