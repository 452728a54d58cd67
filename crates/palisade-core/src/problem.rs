//! RFC 7807 problem document payload.
//!
//! [`ProblemResponse`] is the structured error payload returned to clients
//! on every failure path. It is produced only by the error translator at
//! the transport boundary; inner behaviors fail with [`PalisadeError`]
//! values and never construct problem documents directly.
//!
//! The client-visible `detail` strings come from a small fixed set. Internal
//! error text is never serialized into a problem document.
//!
//! [`PalisadeError`]: crate::PalisadeError

use crate::error::FieldViolations;
use serde::{Deserialize, Serialize};

/// Problem type URI for 401 Unauthorized responses.
pub const TYPE_UNAUTHORIZED: &str = "https://tools.ietf.org/html/rfc7235#section-3.1";

/// Problem type URI for 400 Bad Request responses.
pub const TYPE_BAD_REQUEST: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";

/// Problem type URI for 403 Forbidden responses.
pub const TYPE_FORBIDDEN: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.3";

/// Problem type URI for 500 Internal Server Error responses.
pub const TYPE_INTERNAL: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.1";

/// An RFC 7807 problem document.
///
/// Serialized as `application/problem+json`:
///
/// ```json
/// {
///   "type": "https://tools.ietf.org/html/rfc7231#section-6.5.3",
///   "title": "Forbidden",
///   "status": 403,
///   "detail": "operation not permitted for current principal",
///   "instance": "/users/42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemResponse {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    pub detail: String,

    /// URI reference identifying this occurrence (the request path).
    pub instance: String,

    /// Field-level violations, present only on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<FieldViolations>,
}

impl ProblemResponse {
    /// Builds the 401 problem document for any credential failure.
    ///
    /// The detail is identical for every failure reason so clients cannot
    /// distinguish a missing key from an invalid one or from an unconfigured
    /// credential set.
    #[must_use]
    pub fn unauthorized(instance: impl Into<String>) -> Self {
        Self {
            type_uri: TYPE_UNAUTHORIZED.to_string(),
            title: "Unauthorized".to_string(),
            status: 401,
            detail: "credential is missing or invalid".to_string(),
            instance: instance.into(),
            violations: None,
        }
    }

    /// Builds the 400 problem document for a validation failure.
    #[must_use]
    pub fn bad_request(instance: impl Into<String>, violations: FieldViolations) -> Self {
        Self {
            type_uri: TYPE_BAD_REQUEST.to_string(),
            title: "Bad Request".to_string(),
            status: 400,
            detail: "one or more validation rules failed".to_string(),
            instance: instance.into(),
            violations: Some(violations),
        }
    }

    /// Builds the 403 problem document for an unauthorized operation.
    #[must_use]
    pub fn forbidden(instance: impl Into<String>) -> Self {
        Self {
            type_uri: TYPE_FORBIDDEN.to_string(),
            title: "Forbidden".to_string(),
            status: 403,
            detail: "operation not permitted for current principal".to_string(),
            instance: instance.into(),
            violations: None,
        }
    }

    /// Builds the 500 problem document for an unclassified failure.
    #[must_use]
    pub fn internal_server_error(instance: impl Into<String>) -> Self {
        Self {
            type_uri: TYPE_INTERNAL.to_string(),
            title: "Internal Server Error".to_string(),
            status: 500,
            detail: "an unexpected error occurred".to_string(),
            instance: instance.into(),
            violations: None,
        }
    }
}
