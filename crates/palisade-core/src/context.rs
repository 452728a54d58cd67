//! Per-request context types.
//!
//! The [`OperationContext`] carries per-request state through the behavior
//! chain and into the terminal handler. The authenticated [`Principal`] (or
//! its absence) is threaded through the chain as an explicit context value,
//! never looked up from ambient per-request globals.

use crate::principal::Principal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// A unique identifier for each request, using UUID v7.
///
/// UUID v7 is time-ordered, which makes it ideal for request tracking
/// and log correlation.
///
/// # Example
///
/// ```
/// use palisade_core::RequestId;
///
/// let id = RequestId::new();
/// println!("Request ID: {}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new unique request ID using UUID v7.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `RequestId` from an existing UUID.
    ///
    /// Useful when the ID was propagated from an upstream service.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Per-request context that flows through the behavior chain.
///
/// The context is built once per request by the transport boundary, before
/// the chain runs, and is read-only from then on. It carries:
///
/// - A unique [`RequestId`] for log correlation
/// - The request path (used as the `instance` of problem responses)
/// - The authenticated [`Principal`], if credential verification succeeded
/// - Request timing information
///
/// # Example
///
/// ```
/// use palisade_core::{OperationContext, Principal};
///
/// let ctx = OperationContext::new("/users/42").with_principal(Principal::api_user());
/// assert!(ctx.is_authenticated());
/// assert_eq!(ctx.path(), "/users/42");
/// ```
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Unique identifier for this request.
    request_id: RequestId,

    /// The request path.
    path: String,

    /// The authenticated caller, if any.
    principal: Option<Principal>,

    /// When the request started processing.
    started_at: Instant,
}

impl OperationContext {
    /// Creates a new context for the given request path, with a fresh
    /// request ID and no authenticated principal.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            path: path.into(),
            principal: None,
            started_at: Instant::now(),
        }
    }

    /// Creates a context with a specific request ID.
    #[must_use]
    pub fn with_request_id(path: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            request_id,
            path: path.into(),
            principal: None,
            started_at: Instant::now(),
        }
    }

    /// Attaches an authenticated principal to this context.
    #[must_use]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Returns the request ID.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the authenticated principal, if any.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Returns `true` if an authenticated principal is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// Returns when the request started processing.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Returns the elapsed time since the request started.
    #[must_use]
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}
