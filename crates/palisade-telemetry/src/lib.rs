//! Structured logging initialization for Palisade services.
//!
//! A thin layer over `tracing-subscriber`: the rest of the workspace
//! emits events through `tracing`, and this crate installs the
//! subscriber that renders them.
//!
//! # Example
//!
//! ```rust,ignore
//! use palisade_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production())?;
//! ```

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogConfig};
