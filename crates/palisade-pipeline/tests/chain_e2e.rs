//! End-to-end behavior chain tests.
//!
//! These exercise the standard chain (Logging → Validation → Authorization)
//! against the terminal handler, covering short-circuits, ordering, and the
//! explicit-context authorization check.

use palisade_core::{Operation, OperationContext, PalisadeError, Principal};
use palisade_pipeline::{Chain, RuleSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// An operation anyone may run.
struct Echo {
    message: String,
}

impl Operation for Echo {
    type Output = String;
    const NAME: &'static str = "Echo";
}

/// An operation that requires an authenticated principal.
struct DeleteUser {
    user_id: String,
}

impl Operation for DeleteUser {
    type Output = ();
    const NAME: &'static str = "DeleteUser";
    const REQUIRES_AUTH: bool = true;
}

fn echo_chain() -> Chain<Echo> {
    Chain::standard(Arc::new(
        RuleSet::new().rule("message", "must not be empty", |op: &Echo| {
            !op.message.is_empty()
        }),
    ))
}

fn delete_chain() -> Chain<DeleteUser> {
    Chain::standard(Arc::new(
        RuleSet::new().rule("user_id", "must not be empty", |op: &DeleteUser| {
            !op.user_id.is_empty()
        }),
    ))
}

#[tokio::test]
async fn untagged_operation_runs_without_authentication() {
    let chain = echo_chain();
    let ctx = OperationContext::new("/echo");

    let result = chain
        .execute(&ctx, Echo { message: "hi".into() }, |_ctx, op| {
            Box::pin(async move { Ok(op.message) })
        })
        .await;

    assert_eq!(result.unwrap(), "hi");
}

#[tokio::test]
async fn tagged_operation_runs_with_principal() {
    let chain = delete_chain();
    let ctx = OperationContext::new("/users/42").with_principal(Principal::api_user());

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let result = chain
        .execute(
            &ctx,
            DeleteUser {
                user_id: "42".into(),
            },
            move |_ctx, _op| {
                Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
            },
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn tagged_operation_short_circuits_without_principal() {
    let chain = delete_chain();
    let ctx = OperationContext::new("/users/42");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let result = chain
        .execute(
            &ctx,
            DeleteUser {
                user_id: "42".into(),
            },
            move |_ctx, _op| {
                Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
            },
        )
        .await;

    match result {
        Err(PalisadeError::Unauthorized { operation }) => assert_eq!(operation, "DeleteUser"),
        other => panic!("expected unauthorized error, got {other:?}"),
    }
    // Rejection is side-effect free: the handler never ran.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn validation_failure_wins_over_authorization() {
    // A malformed, auth-tagged operation executed without a principal must
    // fail validation, not authorization: validation is the outer gate.
    let chain = delete_chain();
    let ctx = OperationContext::new("/users/");

    let result = chain
        .execute(
            &ctx,
            DeleteUser {
                user_id: String::new(),
            },
            |_ctx, _op| Box::pin(async { Ok(()) }),
        )
        .await;

    match result {
        Err(PalisadeError::Validation { operation, .. }) => assert_eq!(operation, "DeleteUser"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn handler_failure_propagates_through_all_behaviors() {
    let chain = echo_chain();
    let ctx = OperationContext::new("/echo");

    let result = chain
        .execute(&ctx, Echo { message: "hi".into() }, |_ctx, _op| {
            Box::pin(async { Err(PalisadeError::internal("downstream unavailable")) })
        })
        .await;

    match result {
        Err(PalisadeError::Internal { message, .. }) => {
            assert_eq!(message, "downstream unavailable");
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[tokio::test]
async fn chain_is_reusable_across_executions() {
    let chain = echo_chain();

    for i in 0..3 {
        let ctx = OperationContext::new("/echo");
        let result = chain
            .execute(
                &ctx,
                Echo {
                    message: format!("run {i}"),
                },
                |_ctx, op| Box::pin(async move { Ok(op.message) }),
            )
            .await;
        assert_eq!(result.unwrap(), format!("run {i}"));
    }
}
