//! Structured logging built on the tracing-subscriber ecosystem.
//!
//! The behavior chain and credential verifier emit structured events
//! through `tracing`; this module installs the global subscriber that
//! renders them, either as JSON for production or pretty output for
//! development.
//!
//! # Example
//!
//! ```rust,ignore
//! use palisade_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default())?;
//!
//! tracing::info!(operation = "GetReport", "handled operation");
//! ```

use crate::error::TelemetryError;
use crate::TelemetryResult;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Log level filter (e.g. "info", "debug", "warn").
    pub level: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include file/line info.
    pub file_line_info: bool,

    /// Whether to include target (module path).
    pub include_target: bool,

    /// Environment name announced in the startup record.
    pub environment: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            json_format: true,
            file_line_info: false,
            include_target: true,
            environment: "production".to_string(),
        }
    }
}

impl LogConfig {
    /// Creates a development configuration with human-readable output.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            level: "debug".to_string(),
            json_format: false,
            file_line_info: true,
            include_target: true,
            environment: "development".to_string(),
        }
    }

    /// Creates a production configuration with JSON output.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}

/// Initializes the global logging subscriber.
///
/// Does nothing when `config.enabled` is false. May only be called once
/// per process. After installation, emits one startup record announcing
/// the environment name, level, and output format.
///
/// # Errors
///
/// Returns `TelemetryError::LoggingInit` if the level filter is invalid
/// or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| TelemetryError::LoggingInit(format!("invalid log level: {e}")))?;

    if config.json_format {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    startup_banner(config);

    Ok(())
}

/// Emits the one-time startup record through the active subscriber.
fn startup_banner(config: &LogConfig) {
    let format = if config.json_format { "json" } else { "pretty" };
    tracing::info!(
        environment = %config.environment,
        level = %config.level,
        format,
        "logging initialized"
    );
}
