//! Logging configuration and setup
//!
//! This module wires the three ACDICE log sinks: colored console output at
//! the configured level, a daily-rolling debug file, and a dedicated error
//! file. Rotation and writing happen off-thread via `tracing-appender`.

use std::fs;
use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Settings;
use crate::utils::errors::Result;

/// Directory for file sinks, created on initialization
pub const LOG_DIR: &str = "logs";

/// Keeps the non-blocking writer workers alive.
///
/// Dropping this flushes and stops the background writers; hold it until
/// process exit.
pub struct LogGuards {
    _workers: [WorkerGuard; 2],
}

/// Initialize logging based on configuration
pub fn init_logging(settings: &Settings) -> Result<LogGuards> {
    let log_dir = Path::new(LOG_DIR);
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "acdice.log");
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let error_appender = tracing_appender::rolling::never(log_dir, "errors.log");
    let (error_writer, error_guard) = tracing_appender::non_blocking(error_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(EnvFilter::new(console_directive(&settings.log_level))),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(LevelFilter::DEBUG),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(error_writer)
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    info!(level = %settings.log_level, "Logging initialized");
    Ok(LogGuards {
        _workers: [file_guard, error_guard],
    })
}

/// Map a configured level name onto a tracing filter directive.
///
/// WARNING and CRITICAL have no direct tracing equivalent; they map to
/// `warn` and `error`.
fn console_directive(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}
