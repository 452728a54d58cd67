//! The API key credential verifier.
//!
//! Verification order:
//!
//! 1. Look up the `x-api-key` header; absent ⇒ [`AuthFailure::MissingCredential`]
//! 2. Check the configured set; empty ⇒ [`AuthFailure::NoCredentialsConfigured`]
//! 3. Check membership; not a member ⇒ [`AuthFailure::InvalidCredential`]
//! 4. Otherwise succeed with the fixed `"API User"` principal
//!
//! Every outcome emits exactly one log record. `NoCredentialsConfigured` is
//! logged at error severity because it signals an operational
//! misconfiguration rather than a client mistake; the client response is
//! identical for all three failures so the distinction never leaks.

use crate::credentials::CredentialSet;
use http::HeaderMap;
use palisade_core::Principal;
use std::sync::Arc;
use thiserror::Error;

/// The request header carrying the shared-secret credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Length of the credential prefix that may appear in logs.
const LOGGED_PREFIX_LEN: usize = 6;

/// Why credential verification failed.
///
/// The reason is used only for logging; the transport layer returns the
/// same generic 401 body for every variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// The credential header was absent.
    #[error("credential header is missing")]
    MissingCredential,

    /// The allow-list is empty or unset, an operational misconfiguration.
    #[error("no credentials configured")]
    NoCredentialsConfigured,

    /// The presented credential is not a member of the allow-list.
    #[error("credential is invalid")]
    InvalidCredential,
}

/// The result of verifying a request's credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// The credential is valid; the caller is the attached principal.
    Success(Principal),
    /// The credential was rejected for the given reason.
    Failure(AuthFailure),
}

impl AuthenticationOutcome {
    /// Returns `true` if verification succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the authenticated principal, if verification succeeded.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Success(principal) => Some(principal),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure reason, if verification failed.
    #[must_use]
    pub fn failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(*reason),
        }
    }
}

/// Verifies the shared-secret credential on inbound requests.
///
/// The verifier holds the process-wide [`CredentialSet`] behind an `Arc`;
/// it is cheap to clone and safe to share across concurrent requests.
///
/// # Example
///
/// ```
/// use http::HeaderMap;
/// use palisade_auth::{ApiKeyVerifier, CredentialSet, API_KEY_HEADER};
/// use std::sync::Arc;
///
/// let verifier = ApiKeyVerifier::new(Arc::new(CredentialSet::new(vec!["abc123".into()])));
///
/// let mut headers = HeaderMap::new();
/// headers.insert(API_KEY_HEADER, "abc123".parse().unwrap());
///
/// let outcome = verifier.verify(&headers, "/users");
/// assert!(outcome.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct ApiKeyVerifier {
    credentials: Arc<CredentialSet>,
}

impl ApiKeyVerifier {
    /// Creates a verifier over the configured credential set.
    #[must_use]
    pub fn new(credentials: Arc<CredentialSet>) -> Self {
        Self { credentials }
    }

    /// Verifies the credential presented in the request headers.
    ///
    /// Deterministic: the outcome depends only on the headers and the
    /// configured set. The request path is used for logging only.
    #[must_use]
    pub fn verify(&self, headers: &HeaderMap, path: &str) -> AuthenticationOutcome {
        let Some(presented) = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) else {
            tracing::warn!(path, "authentication failed: missing API key");
            return AuthenticationOutcome::Failure(AuthFailure::MissingCredential);
        };

        if self.credentials.is_empty() {
            tracing::error!(path, "authentication failed: no API keys configured");
            return AuthenticationOutcome::Failure(AuthFailure::NoCredentialsConfigured);
        }

        if !self.credentials.contains(presented) {
            tracing::warn!(
                path,
                key_prefix = %key_prefix(presented),
                "authentication failed: invalid API key"
            );
            return AuthenticationOutcome::Failure(AuthFailure::InvalidCredential);
        }

        let principal = Principal::api_user();
        tracing::debug!(path, principal = %principal, "authentication succeeded");
        AuthenticationOutcome::Success(principal)
    }
}

/// Truncates a credential to the short prefix that may appear in logs.
///
/// Full secrets must never reach the log sink, even on failure. Keys at or
/// below the prefix length are redacted outright: truncation alone would
/// reproduce them in full.
fn key_prefix(credential: &str) -> String {
    if credential.chars().count() <= LOGGED_PREFIX_LEN {
        return "<redacted>".to_string();
    }
    let prefix: String = credential.chars().take(LOGGED_PREFIX_LEN).collect();
    format!("{prefix}...")
}
