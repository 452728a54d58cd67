//! The error translator.
//!
//! Outermost boundary component: every failure from the credential verifier
//! or the behavior chain funnels through here and becomes a problem
//! response. It is a single catch/dispatch with three terminal outcomes per
//! chain failure (400, 403, 500) plus the 401 challenge for credential
//! failures: a pure mapping from error kind to response shape, not a
//! catch-block keyed on exception types.
//!
//! Client-visible detail is always one of a small fixed set of strings;
//! internal error detail is logged server-side and never serialized into
//! the body.

use crate::types::{problem_response, Response, CHALLENGE};
use palisade_core::{PalisadeError, ProblemResponse};

/// Translates pipeline failures into problem responses.
///
/// Stateless; one instance serves the whole process.
#[derive(Debug, Clone, Default)]
pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Creates a new translator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a behavior chain failure to its response.
    ///
    /// - [`PalisadeError::Unauthorized`] → 403 Forbidden
    /// - [`PalisadeError::Validation`] → 400 Bad Request with violations
    /// - anything else → 500 with no internal detail leaked
    #[must_use]
    pub fn translate(&self, path: &str, error: &PalisadeError) -> Response {
        match error {
            PalisadeError::Unauthorized { operation } => {
                tracing::error!(path, operation, "unauthorized operation");
                problem_response(&ProblemResponse::forbidden(path))
            }
            PalisadeError::Validation {
                operation,
                violations,
            } => {
                tracing::warn!(path, operation, "validation failed");
                problem_response(&ProblemResponse::bad_request(path, violations.clone()))
            }
            PalisadeError::Internal { .. } => {
                // Full detail stays server-side; the client sees a fixed string.
                tracing::error!(path, error = ?error, "unhandled error");
                problem_response(&ProblemResponse::internal_server_error(path))
            }
        }
    }

    /// Builds the 401 challenge response for any credential failure.
    ///
    /// The body is identical for every failure reason; the reason is logged
    /// by the verifier, not exposed to the client.
    #[must_use]
    pub fn challenge(&self, path: &str) -> Response {
        let mut response = problem_response(&ProblemResponse::unauthorized(path));
        response.headers_mut().insert(
            http::header::WWW_AUTHENTICATE,
            http::HeaderValue::from_static(CHALLENGE),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use palisade_core::FieldViolations;

    #[test]
    fn test_unauthorized_maps_to_403() {
        let translator = ErrorTranslator::new();
        let response = translator.translate("/users/42", &PalisadeError::unauthorized("DeleteUser"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let translator = ErrorTranslator::new();
        let mut violations = FieldViolations::new();
        violations.add("email", "must contain '@'");

        let response = translator.translate(
            "/users",
            &PalisadeError::validation("CreateUser", violations),
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let translator = ErrorTranslator::new();
        let response =
            translator.translate("/users", &PalisadeError::internal("secret database detail"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_challenge_names_the_scheme() {
        let translator = ErrorTranslator::new();
        let response = translator.challenge("/users");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(http::header::WWW_AUTHENTICATE)
                .unwrap(),
            "ApiKey"
        );
    }
}
