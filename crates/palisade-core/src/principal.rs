//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

/// The authentication scheme name used by the API key verifier.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// An authenticated identity attached to a successful credential check.
///
/// Palisade authenticates callers against a shared-secret allow-list, so
/// every valid credential maps to the same fixed identity: credentials are
/// not scoped to individual users.
///
/// # Example
///
/// ```
/// use palisade_core::Principal;
///
/// let principal = Principal::api_user();
/// assert_eq!(principal.name(), "API User");
/// assert_eq!(principal.scheme(), "ApiKey");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Display name of the authenticated caller.
    name: String,

    /// The authentication scheme that produced this principal.
    scheme: String,
}

impl Principal {
    /// Creates a principal with an explicit name and scheme.
    #[must_use]
    pub fn new(name: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: scheme.into(),
        }
    }

    /// Creates the fixed identity produced by successful API key
    /// verification.
    #[must_use]
    pub fn api_user() -> Self {
        Self::new("API User", API_KEY_SCHEME)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scheme tag.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.scheme, self.name)
    }
}
