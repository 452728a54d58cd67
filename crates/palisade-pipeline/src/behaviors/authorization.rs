//! Authorization behavior.
//!
//! A capability check keyed purely on the operation type's
//! [`Operation::REQUIRES_AUTH`] marker plus the presence of a principal in
//! the context. It never inspects the principal's attributes; the system
//! has only one principal shape.
//!
//! Untagged operations delegate immediately without consulting the
//! principal at all.

use crate::behavior::{Behavior, BoxFuture, Next};
use palisade_core::{Operation, OperationContext, OperationResult, PalisadeError};

/// Behavior that gates tagged operations on an authenticated principal.
///
/// If the operation type requires authentication and no principal is
/// present, the chain short-circuits with [`PalisadeError::Unauthorized`]
/// carrying the operation's type name; the next link is never invoked.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationBehavior;

impl AuthorizationBehavior {
    /// Creates a new authorization behavior.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<O: Operation> Behavior<O> for AuthorizationBehavior {
    fn name(&self) -> &'static str {
        "authorization"
    }

    fn handle<'a>(
        &'a self,
        ctx: &'a OperationContext,
        operation: O,
        next: Next<'a, O>,
    ) -> BoxFuture<'a, OperationResult<O::Output>> {
        Box::pin(async move {
            if !O::REQUIRES_AUTH {
                return next.run(ctx, operation).await;
            }

            if ctx.principal().is_none() {
                tracing::warn!(
                    request_id = %ctx.request_id(),
                    operation = O::NAME,
                    path = ctx.path(),
                    "unauthorized access attempt"
                );
                return Err(PalisadeError::unauthorized(O::NAME));
            }

            next.run(ctx, operation).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_core::Principal;
    use std::sync::{Arc, Mutex};

    struct Open;

    impl Operation for Open {
        type Output = &'static str;
        const NAME: &'static str = "Open";
    }

    struct Restricted;

    impl Operation for Restricted {
        type Output = &'static str;
        const NAME: &'static str = "Restricted";
        const REQUIRES_AUTH: bool = true;
    }

    #[tokio::test]
    async fn test_untagged_operation_proceeds_without_principal() {
        let behavior = AuthorizationBehavior::new();
        let ctx = OperationContext::new("/open");

        let next = Next::handler(|_ctx, _op: Open| Box::pin(async { Ok("ok") }));
        let result = behavior.handle(&ctx, Open, next).await;

        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_tagged_operation_rejected_without_principal() {
        let behavior = AuthorizationBehavior::new();
        let ctx = OperationContext::new("/restricted");

        let handler_ran = Arc::new(Mutex::new(false));
        let ran = handler_ran.clone();
        let next = Next::handler(move |_ctx, _op: Restricted| {
            Box::pin(async move {
                *ran.lock().unwrap() = true;
                Ok("ok")
            })
        });

        let result = behavior.handle(&ctx, Restricted, next).await;

        match result {
            Err(PalisadeError::Unauthorized { operation }) => {
                assert_eq!(operation, "Restricted");
            }
            other => panic!("expected unauthorized error, got {other:?}"),
        }
        // Side-effect-free rejection: the handler never ran.
        assert!(!*handler_ran.lock().unwrap());
    }

    #[tokio::test]
    async fn test_tagged_operation_proceeds_with_principal() {
        let behavior = AuthorizationBehavior::new();
        let ctx = OperationContext::new("/restricted").with_principal(Principal::api_user());

        let next = Next::handler(|_ctx, _op: Restricted| Box::pin(async { Ok("ok") }));
        let result = behavior.handle(&ctx, Restricted, next).await;

        assert_eq!(result.unwrap(), "ok");
    }

    #[test]
    fn test_behavior_name() {
        assert_eq!(
            Behavior::<Open>::name(&AuthorizationBehavior::new()),
            "authorization"
        );
    }
}
