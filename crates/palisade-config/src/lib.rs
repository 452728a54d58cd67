//! Typed configuration for Palisade services.
//!
//! This crate provides a strongly-typed configuration system with support
//! for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! Configuration is built around [`PalisadeConfig`]:
//!
//! - [`AuthConfig`] - the API key allow-list for the credential verifier
//! - [`TelemetrySection`] - logging settings
//!
//! # Example
//!
//! ```no_run
//! use palisade_config::ConfigLoader;
//!
//! # fn main() -> Result<(), palisade_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("palisade.toml")?
//!     .with_env_prefix("PALISADE")
//!     .load()?;
//!
//! println!("{} API key(s) configured", config.auth.api_keys.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [auth]
//! api_keys = ["k1a2b3c4d5e6", "f7g8h9i0j1k2"]
//!
//! [telemetry.logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ```

mod config;
mod error;
mod loader;

pub use config::{AuthConfig, LogFormat, LoggingSection, PalisadeConfig, TelemetrySection};
pub use error::ConfigError;
pub use loader::ConfigLoader;
