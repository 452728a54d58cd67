//! Error types for the Palisade pipeline.
//!
//! Failures inside the behavior chain are values, not exceptions: every
//! behavior returns an [`OperationResult`], and [`PalisadeError`] is the
//! failure side. The error translator at the transport boundary maps each
//! variant to its problem response; inner behaviors never build responses
//! themselves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for behavior chain executions.
pub type OperationResult<T> = Result<T, PalisadeError>;

/// Standard error type for pipeline failures.
///
/// The variants mirror the pipeline's failure taxonomy:
///
/// | Variant | Origin | Client-visible |
/// |---|---|---|
/// | `Validation` | validation gate | 400 with violation detail |
/// | `Unauthorized` | authorization gate | 403, generic detail |
/// | `Internal` | any handler/behavior | 500, generic detail |
///
/// # Example
///
/// ```
/// use palisade_core::{OperationResult, PalisadeError};
///
/// fn check(data: &str) -> OperationResult<()> {
///     if data.is_empty() {
///         return Err(PalisadeError::internal("data must not be empty"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum PalisadeError {
    /// One or more declarative validation rules failed.
    #[error("validation failed for {operation}")]
    Validation {
        /// The operation's type name.
        operation: &'static str,
        /// Field-level violations.
        violations: FieldViolations,
    },

    /// An operation requiring authentication ran without a principal.
    #[error("operation {operation} not permitted without an authenticated principal")]
    Unauthorized {
        /// The operation's type name, for diagnostics.
        operation: &'static str,
    },

    /// Any other failure from a handler or behavior.
    ///
    /// The message and source are logged server-side and never serialized
    /// into the client response.
    #[error("internal error: {message}")]
    Internal {
        /// Human-readable error message (server-side only).
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl PalisadeError {
    /// Creates a validation error from field-level violations.
    #[must_use]
    pub fn validation(operation: &'static str, violations: FieldViolations) -> Self {
        Self::Validation {
            operation,
            violations,
        }
    }

    /// Creates an unauthorized-operation error.
    #[must_use]
    pub fn unauthorized(operation: &'static str) -> Self {
        Self::Unauthorized { operation }
    }

    /// Creates an internal error with a message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an internal error wrapping a source error.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the operation name attached to this error, if any.
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Validation { operation, .. } | Self::Unauthorized { operation } => {
                Some(operation)
            }
            Self::Internal { .. } => None,
        }
    }
}

/// Field-level validation violations.
///
/// Maps a field path to the list of rule messages it violated. A `BTreeMap`
/// keeps serialization order stable for clients and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolations {
    /// Map of field path to violation messages.
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FieldViolations {
    /// Creates an empty set of violations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields with violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_carries_operation_name() {
        let error = PalisadeError::unauthorized("DeleteUser");
        assert_eq!(error.operation(), Some("DeleteUser"));
        assert!(error.to_string().contains("DeleteUser"));
    }

    #[test]
    fn test_validation_error() {
        let mut violations = FieldViolations::new();
        violations.add("email", "must contain '@'");
        violations.add("email", "must not be empty");
        violations.add("name", "too long");

        let error = PalisadeError::validation("CreateUser", violations);
        assert_eq!(error.operation(), Some("CreateUser"));
        match error {
            PalisadeError::Validation { violations, .. } => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations.fields["email"].len(), 2);
            }
            _ => panic!("expected validation error"),
        }
    }

    #[test]
    fn test_internal_error_has_no_operation() {
        let error = PalisadeError::internal("database unreachable");
        assert_eq!(error.operation(), None);
    }

    #[test]
    fn test_internal_error_chains_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = PalisadeError::internal_with_source("downstream call failed", io);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_field_violations() {
        let mut violations = FieldViolations::new();
        assert!(violations.is_empty());

        violations.add("email", "invalid format");
        assert!(!violations.is_empty());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_violations_serialize_in_stable_order() {
        let mut violations = FieldViolations::new();
        violations.add("zeta", "bad");
        violations.add("alpha", "bad");

        let json = serde_json::to_string(&violations).expect("serialization should work");
        let alpha = json.find("alpha").unwrap();
        let zeta = json.find("zeta").unwrap();
        assert!(alpha < zeta);
    }
}
