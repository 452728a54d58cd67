//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur during telemetry initialization.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Logging initialization failed.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
