//! Composition glue at the transport boundary.
//!
//! The [`Gateway`] wires the credential verifier, the behavior chain, and
//! the error translator together for one request:
//!
//! ```text
//! headers ── verify ──► context(principal) ── chain ──► typed result
//!     │ failure                     │ failure
//!     ▼                             ▼
//!   401 challenge            400 / 403 / 500 problem
//! ```
//!
//! The success path stays typed: the caller's transport layer serializes
//! the handler's output unchanged.

use crate::translator::ErrorTranslator;
use crate::types::Response;
use http::HeaderMap;
use palisade_auth::{ApiKeyVerifier, AuthenticationOutcome, CredentialSet};
use palisade_core::{Operation, OperationContext, OperationResult};
use palisade_pipeline::{BoxFuture, Chain};
use std::sync::Arc;

/// The terminal state of one gated request.
#[derive(Debug)]
pub enum GateOutcome<T> {
    /// The chain completed; the transport layer serializes this value.
    Completed(T),
    /// The request was rejected with a finished problem response.
    Rejected(Response),
}

impl<T> GateOutcome<T> {
    /// Returns `true` if the chain completed normally.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the completed value, if any.
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection response, if any.
    #[must_use]
    pub fn rejected(self) -> Option<Response> {
        match self {
            Self::Completed(_) => None,
            Self::Rejected(response) => Some(response),
        }
    }
}

/// Runs the full pipeline for inbound requests.
///
/// Holds the process-wide collaborators (credential set, translator); cheap
/// to clone and safe to share across concurrent requests.
///
/// # Example
///
/// ```
/// use http::HeaderMap;
/// use palisade_auth::{CredentialSet, API_KEY_HEADER};
/// use palisade_core::Operation;
/// use palisade_http::Gateway;
/// use palisade_pipeline::{Chain, RuleSet};
/// use std::sync::Arc;
///
/// struct Ping;
///
/// impl Operation for Ping {
///     type Output = &'static str;
///     const NAME: &'static str = "Ping";
///     const REQUIRES_AUTH: bool = true;
/// }
///
/// # tokio_test::block_on(async {
/// let gateway = Gateway::new(Arc::new(CredentialSet::new(vec!["abc123".into()])));
/// let chain = Chain::standard(Arc::new(RuleSet::<Ping>::new()));
///
/// let mut headers = HeaderMap::new();
/// headers.insert(API_KEY_HEADER, "abc123".parse().unwrap());
///
/// let outcome = gateway
///     .execute(&headers, "/ping", &chain, Ping, |_ctx, _op| {
///         Box::pin(async { Ok("pong") })
///     })
///     .await;
///
/// assert_eq!(outcome.completed(), Some("pong"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Gateway {
    verifier: ApiKeyVerifier,
    translator: ErrorTranslator,
}

impl Gateway {
    /// Creates a gateway over the configured credential set.
    #[must_use]
    pub fn new(credentials: Arc<CredentialSet>) -> Self {
        Self {
            verifier: ApiKeyVerifier::new(credentials),
            translator: ErrorTranslator::new(),
        }
    }

    /// Gates a request: verify the credential, then run the chain.
    ///
    /// Any credential failure short-circuits with the 401 challenge before
    /// the operation is even considered; the chain then runs with the
    /// authenticated principal in the context.
    pub async fn execute<O, H>(
        &self,
        headers: &HeaderMap,
        path: &str,
        chain: &Chain<O>,
        operation: O,
        handler: H,
    ) -> GateOutcome<O::Output>
    where
        O: Operation,
        H: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>> + Send,
    {
        let ctx = match self.verifier.verify(headers, path) {
            AuthenticationOutcome::Success(principal) => {
                OperationContext::new(path).with_principal(principal)
            }
            AuthenticationOutcome::Failure(_) => {
                return GateOutcome::Rejected(self.translator.challenge(path));
            }
        };

        self.run(&ctx, path, chain, operation, handler).await
    }

    /// Runs the chain without credential verification.
    ///
    /// For anonymous endpoints. The context carries no principal, so
    /// auth-tagged operations still fail in the authorization gate and come
    /// back as 403 rejections.
    pub async fn execute_anonymous<O, H>(
        &self,
        path: &str,
        chain: &Chain<O>,
        operation: O,
        handler: H,
    ) -> GateOutcome<O::Output>
    where
        O: Operation,
        H: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>> + Send,
    {
        let ctx = OperationContext::new(path);
        self.run(&ctx, path, chain, operation, handler).await
    }

    async fn run<O, H>(
        &self,
        ctx: &OperationContext,
        path: &str,
        chain: &Chain<O>,
        operation: O,
        handler: H,
    ) -> GateOutcome<O::Output>
    where
        O: Operation,
        H: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>> + Send,
    {
        match chain.execute(ctx, operation, handler).await {
            Ok(value) => GateOutcome::Completed(value),
            Err(error) => GateOutcome::Rejected(self.translator.translate(path, &error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use palisade_auth::API_KEY_HEADER;
    use palisade_pipeline::RuleSet;

    struct Ping;

    impl Operation for Ping {
        type Output = &'static str;
        const NAME: &'static str = "Ping";
        const REQUIRES_AUTH: bool = true;
    }

    fn gateway_with(keys: Vec<&str>) -> Gateway {
        Gateway::new(Arc::new(CredentialSet::new(
            keys.into_iter().map(String::from),
        )))
    }

    fn headers_with_key(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key.parse().unwrap());
        headers
    }

    fn ping_chain() -> Chain<Ping> {
        Chain::standard(Arc::new(RuleSet::new()))
    }

    #[tokio::test]
    async fn test_valid_key_completes() {
        let gateway = gateway_with(vec!["abc123"]);
        let outcome = gateway
            .execute(
                &headers_with_key("abc123"),
                "/ping",
                &ping_chain(),
                Ping,
                |_ctx, _op| Box::pin(async { Ok("pong") }),
            )
            .await;

        assert_eq!(outcome.completed(), Some("pong"));
    }

    #[tokio::test]
    async fn test_missing_key_rejected_with_401() {
        let gateway = gateway_with(vec!["abc123"]);
        let outcome = gateway
            .execute(
                &HeaderMap::new(),
                "/ping",
                &ping_chain(),
                Ping,
                |_ctx, _op| Box::pin(async { Ok("pong") }),
            )
            .await;

        let response = outcome.rejected().expect("should be rejected");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_anonymous_path_skips_verification() {
        struct Open;

        impl Operation for Open {
            type Output = &'static str;
            const NAME: &'static str = "Open";
        }

        // No keys configured at all; the anonymous path never checks.
        let gateway = gateway_with(vec![]);
        let chain: Chain<Open> = Chain::standard(Arc::new(RuleSet::new()));

        let outcome = gateway
            .execute_anonymous("/open", &chain, Open, |_ctx, _op| {
                Box::pin(async { Ok("ok") })
            })
            .await;

        assert_eq!(outcome.completed(), Some("ok"));
    }

    #[tokio::test]
    async fn test_anonymous_path_still_enforces_capability() {
        let gateway = gateway_with(vec!["abc123"]);
        let outcome = gateway
            .execute_anonymous("/ping", &ping_chain(), Ping, |_ctx, _op| {
                Box::pin(async { Ok("pong") })
            })
            .await;

        let response = outcome.rejected().expect("should be rejected");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
