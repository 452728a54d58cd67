//! # Palisade
//!
//! **Authenticated request-processing pipeline with RFC 7807 error translation**
//!
//! Palisade is an opinionated request-processing layer that provides:
//!
//! - **Shared-Secret Authentication** – API key verification against a startup allow-list
//! - **Fixed Behavior Chain** – Logging → Validation → Authorization, in that order, always
//! - **Static Authorization Markers** – operations declare `REQUIRES_AUTH` at compile time
//! - **Problem Responses** – every failure becomes an `application/problem+json` document
//! - **Explicit Context** – identity travels in an [`OperationContext`], never ambient state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use palisade::prelude::*;
//! use std::sync::Arc;
//!
//! struct GetReport { report_id: String }
//!
//! impl Operation for GetReport {
//!     type Output = String;
//!     const NAME: &'static str = "GetReport";
//!     const REQUIRES_AUTH: bool = true;
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new()
//!         .with_optional_file("palisade.toml")?
//!         .with_env_prefix("PALISADE")
//!         .load()?;
//!     palisade::init_logging_from(&config.telemetry.logging)?;
//!
//!     let gateway = Gateway::new(Arc::new(CredentialSet::new(config.auth.api_keys)));
//!     let chain = Chain::standard(Arc::new(RuleSet::new().rule(
//!         "report_id",
//!         "must not be empty",
//!         |op: &GetReport| !op.report_id.is_empty(),
//!     )));
//!
//!     // Per request: verify credentials, run the chain, translate failures.
//!     // gateway.execute(&headers, path, &chain, operation, handler).await
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Every operation flows through the same fixed chain:
//!
//! ```text
//! Headers → ApiKeyVerifier → Logging → Validation → Authorization → Handler
//!                 │               │          │             │            │
//!                 └── 401 ────────┴── 400 ───┴──── 403 ────┴─── 500 ────┘
//!                              (application/problem+json)
//! ```

#![doc(html_root_url = "https://docs.rs/palisade/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use palisade_core as core;

// Re-export authentication types
pub use palisade_auth as auth;

// Re-export pipeline types
pub use palisade_pipeline as pipeline;

// Re-export transport boundary types
pub use palisade_http as http;

// Re-export configuration types
pub use palisade_config as config;

// Re-export telemetry types
pub use palisade_telemetry as telemetry;

use palisade_config::{LogFormat, LoggingSection};
use palisade_telemetry::{init_logging, LogConfig, TelemetryResult};

/// Initializes logging from a loaded configuration section.
///
/// # Errors
///
/// Returns `TelemetryError::LoggingInit` if the level filter is invalid
/// or a global subscriber is already installed.
pub fn init_logging_from(section: &LoggingSection) -> TelemetryResult<()> {
    let config = LogConfig {
        enabled: section.enabled,
        level: section.level.clone(),
        json_format: section.format == LogFormat::Json,
        ..LogConfig::default()
    };
    init_logging(&config)
}

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use palisade::prelude::*;
/// ```
pub mod prelude {
    pub use palisade_core::{
        FieldViolations, Operation, OperationContext, OperationResult, PalisadeError, Principal,
        ProblemResponse, RequestId,
    };

    // Re-export authentication types
    pub use palisade_auth::{
        ApiKeyVerifier, AuthFailure, AuthenticationOutcome, CredentialSet, API_KEY_HEADER,
    };

    // Re-export chain types
    pub use palisade_pipeline::{
        AuthorizationBehavior, Behavior, Chain, ChainBuilder, LoggingBehavior, Next,
        OperationValidator, RuleSet, ValidationBehavior,
    };

    // Re-export transport boundary types
    pub use palisade_http::{ErrorTranslator, GateOutcome, Gateway};

    // Re-export configuration types
    pub use palisade_config::{ConfigError, ConfigLoader, PalisadeConfig};

    // Re-export telemetry types
    pub use palisade_telemetry::{init_logging, LogConfig};
}
