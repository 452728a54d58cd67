//! Configuration loader with layered approach.
//!
//! This module provides the [`ConfigLoader`] for loading configuration from
//! multiple sources: defaults, files, and environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::{ConfigError, LogFormat, PalisadeConfig};

/// Configuration loader with layered approach.
///
/// The loader applies configuration in layers, with later layers overriding
/// earlier ones:
/// 1. Default values (built into the code)
/// 2. Configuration file (TOML or JSON)
/// 3. Environment variables
///
/// # Example
///
/// ```no_run
/// use palisade_config::ConfigLoader;
///
/// # fn main() -> Result<(), palisade_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_file("palisade.toml")?
///     .with_env_prefix("PALISADE")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    config: PalisadeConfig,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a new configuration loader with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PalisadeConfig::default(),
            env_prefix: None,
        }
    }

    /// Starts from the development preset.
    ///
    /// # Example
    ///
    /// ```
    /// use palisade_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().with_development().load().unwrap();
    /// assert_eq!(config.telemetry.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn with_development(mut self) -> Self {
        self.config = PalisadeConfig::development();
        self
    }

    /// Starts from the production preset.
    #[must_use]
    pub fn with_production(mut self) -> Self {
        self.config = PalisadeConfig::production();
        self
    }

    /// Loads configuration from a file.
    ///
    /// Supports TOML (.toml) and JSON (.json), determined by the file
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist, cannot be read,
    /// contains invalid TOML/JSON, or contains unknown fields.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        self.config = Self::parse_file(&content, path)?;
        Ok(self)
    }

    /// Loads configuration from an optional file.
    ///
    /// If the file exists, loads it. If not, silently continues with the
    /// current values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Loads configuration from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if parsing fails or the format is not "toml"
    /// or "json".
    ///
    /// # Example
    ///
    /// ```
    /// use palisade_config::ConfigLoader;
    ///
    /// let toml = r#"
    ///     [auth]
    ///     api_keys = ["abc123"]
    /// "#;
    ///
    /// let config = ConfigLoader::new()
    ///     .with_string(toml, "toml")
    ///     .unwrap()
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(config.auth.api_keys, vec!["abc123"]);
    /// ```
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => {
                return Err(ConfigError::invalid_value(
                    "format",
                    format!("unsupported configuration format: {format}"),
                ))
            }
        };
        Ok(self)
    }

    /// Sets the environment variable prefix for overrides.
    ///
    /// Environment variables use the format `PREFIX__SECTION__KEY`. With
    /// prefix "PALISADE":
    /// - `PALISADE__AUTH__API_KEYS=key1,key2`
    /// - `PALISADE__TELEMETRY__LOGGING__LEVEL=debug`
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Finalizes and returns the loaded configuration.
    ///
    /// Applies environment variable overrides (if a prefix was set) and
    /// validates the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if environment variable parsing or validation
    /// fails.
    pub fn load(mut self) -> Result<PalisadeConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            self.apply_env_overrides(&prefix)?;
        }

        self.config.validate()?;

        Ok(self.config)
    }

    fn parse_file(content: &str, path: &Path) -> Result<PalisadeConfig, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigError> {
        let env_vars: HashMap<String, String> = env::vars()
            .filter(|(k, _)| k.starts_with(prefix))
            .collect();

        for (key, value) in env_vars {
            self.apply_env_var(&key, &value, prefix)?;
        }

        Ok(())
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let key_without_prefix = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::EnvParseError {
                var: key.to_string(),
                reason: "invalid key format".to_string(),
            })?;

        let parts: Vec<&str> = key_without_prefix.split("__").collect();

        match parts.as_slice() {
            ["AUTH", "API_KEYS"] => {
                self.config.auth.api_keys = value
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect();
            }

            ["TELEMETRY", "LOGGING", "ENABLED"] => {
                self.config.telemetry.logging.enabled =
                    parse_bool(value).ok_or_else(|| ConfigError::EnvParseError {
                        var: key.to_string(),
                        reason: "expected boolean".to_string(),
                    })?;
            }
            ["TELEMETRY", "LOGGING", "LEVEL"] => {
                self.config.telemetry.logging.level = value.to_string();
            }
            ["TELEMETRY", "LOGGING", "FORMAT"] => {
                self.config.telemetry.logging.format = match value.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    "pretty" => LogFormat::Pretty,
                    _ => {
                        return Err(ConfigError::EnvParseError {
                            var: key.to_string(),
                            reason: "expected 'json' or 'pretty'".to_string(),
                        })
                    }
                };
            }

            // Unknown key - ignore
            _ => {}
        }

        Ok(())
    }
}

/// Parse a boolean from a string.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loader_defaults() {
        let config = ConfigLoader::new().load().unwrap();
        assert!(config.auth.api_keys.is_empty());
        assert_eq!(config.telemetry.logging.level, "info");
    }

    #[test]
    fn test_loader_with_development() {
        let config = ConfigLoader::new().with_development().load().unwrap();
        assert_eq!(config.telemetry.logging.level, "debug");
        assert_eq!(config.telemetry.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_loader_with_production() {
        let config = ConfigLoader::new().with_production().load().unwrap();
        assert_eq!(config.telemetry.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_loader_with_string_toml() {
        let toml = r#"
            [auth]
            api_keys = ["abc123", "def456"]
        "#;

        let config = ConfigLoader::new()
            .with_string(toml, "toml")
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(config.auth.api_keys, vec!["abc123", "def456"]);
    }

    #[test]
    fn test_loader_with_string_json() {
        let json = r#"{"auth": {"api_keys": ["abc123"]}}"#;

        let config = ConfigLoader::new()
            .with_string(json, "json")
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(config.auth.api_keys, vec!["abc123"]);
    }

    #[test]
    fn test_loader_with_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
            [auth]
            api_keys = ["from-file"]

            [telemetry.logging]
            enabled = true
            level = "warn"
            format = "pretty"
            "#
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_file(file.path())
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(config.auth.api_keys, vec!["from-file"]);
        assert_eq!(config.telemetry.logging.level, "warn");
    }

    #[test]
    fn test_loader_with_file_not_found() {
        let result = ConfigLoader::new().with_file("/nonexistent/palisade.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_loader_with_optional_file_not_found() {
        let config = ConfigLoader::new()
            .with_optional_file("/nonexistent/palisade.toml")
            .unwrap()
            .load()
            .unwrap();

        assert!(config.auth.api_keys.is_empty());
    }

    #[test]
    fn test_loader_unsupported_extension() {
        let file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();

        let result = ConfigLoader::new().with_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    // Environment variable override tests use apply_env_var directly because
    // Rust 2024 requires unsafe blocks for set_var/remove_var, and this
    // project forbids unsafe code.

    #[test]
    fn test_apply_env_var_api_keys() {
        let mut loader = ConfigLoader::new();
        loader
            .apply_env_var("TEST__AUTH__API_KEYS", "key1, key2,key3", "TEST")
            .unwrap();
        assert_eq!(loader.config.auth.api_keys, vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_apply_env_var_logging() {
        let mut loader = ConfigLoader::new();
        loader
            .apply_env_var("TEST__TELEMETRY__LOGGING__LEVEL", "debug", "TEST")
            .unwrap();
        loader
            .apply_env_var("TEST__TELEMETRY__LOGGING__FORMAT", "pretty", "TEST")
            .unwrap();
        assert_eq!(loader.config.telemetry.logging.level, "debug");
        assert_eq!(loader.config.telemetry.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_apply_env_var_invalid_boolean() {
        let mut loader = ConfigLoader::new();
        let result = loader.apply_env_var("TEST__TELEMETRY__LOGGING__ENABLED", "maybe", "TEST");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_env_var_unknown_key_ignored() {
        let mut loader = ConfigLoader::new();
        loader
            .apply_env_var("TEST__SOMETHING__ELSE", "value", "TEST")
            .unwrap();
        assert_eq!(loader.config, PalisadeConfig::default());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
