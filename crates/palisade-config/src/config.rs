//! Main configuration types.

use serde::{Deserialize, Serialize};

/// Complete Palisade service configuration.
///
/// Root configuration type containing all sections. Use
/// [`ConfigLoader`](crate::ConfigLoader) to load it from a file and
/// environment variables.
///
/// # Example
///
/// ```
/// use palisade_config::PalisadeConfig;
///
/// let config = PalisadeConfig::default();
/// assert!(config.auth.api_keys.is_empty());
/// assert_eq!(config.telemetry.logging.level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PalisadeConfig {
    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl PalisadeConfig {
    /// Creates the development preset: pretty logs at debug level.
    #[must_use]
    pub fn development() -> Self {
        Self {
            auth: AuthConfig::default(),
            telemetry: TelemetrySection {
                logging: LoggingSection {
                    level: "debug".to_string(),
                    format: LogFormat::Pretty,
                    ..LoggingSection::default()
                },
            },
        }
    }

    /// Creates the production preset: JSON logs at info level.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Validates the configuration after loading.
    ///
    /// An empty `auth.api_keys` list is valid but degraded: every
    /// authenticated request will fail until keys are configured, so it is
    /// surfaced as a warning rather than an error.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.auth.api_keys.is_empty() {
            tracing::warn!("no API keys configured; all authenticated requests will be rejected");
        }

        if self.auth.api_keys.iter().any(String::is_empty) {
            return Err(crate::ConfigError::invalid_value(
                "auth.api_keys",
                "keys must not be empty strings",
            ));
        }

        if self.telemetry.logging.level.is_empty() {
            return Err(crate::ConfigError::invalid_value(
                "telemetry.logging.level",
                "level must not be empty",
            ));
        }

        Ok(())
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// The allow-list of valid API keys.
    ///
    /// Loaded once at startup; empty means all authenticated requests are
    /// rejected with the no-credentials-configured path.
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Telemetry configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Log level filter (e.g. "info", "debug").
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON output for production.
    Json,
    /// Human-readable output for development.
    Pretty,
}
