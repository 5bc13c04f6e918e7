//! Process-wide logging setup

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use super::errors::{AppError, Result};

/// Map a textual log level to a tracing level, falling back to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(level: &str) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Internal(format!("Failed to install logger: {}", e)))
}
