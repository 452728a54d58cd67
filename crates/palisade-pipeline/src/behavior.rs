//! Core behavior trait and chain link types.
//!
//! This module defines the [`Behavior`] trait that all interceptors
//! implement, and the [`Next`] link used to delegate to the rest of the
//! chain.
//!
//! # Invariants
//!
//! - A behavior MUST invoke [`Next::run`] exactly once, unless it
//!   short-circuits by returning a failure. `Next` consumes itself on `run`,
//!   so "more than once" is rejected at compile time; a behavior that both
//!   fails and forwards is a defect.
//! - Behaviors MUST NOT swallow failures from downstream links.
//! - Behaviors are stateless with respect to individual operations; they may
//!   hold process-wide collaborators injected at construction time.
//!
//! # Example
//!
//! ```ignore
//! use palisade_pipeline::{Behavior, BoxFuture, Next};
//! use palisade_core::{Operation, OperationContext, OperationResult};
//!
//! struct NoopBehavior;
//!
//! impl<O: Operation> Behavior<O> for NoopBehavior {
//!     fn name(&self) -> &'static str {
//!         "noop"
//!     }
//!
//!     fn handle<'a>(
//!         &'a self,
//!         ctx: &'a OperationContext,
//!         operation: O,
//!         next: Next<'a, O>,
//!     ) -> BoxFuture<'a, OperationResult<O::Output>> {
//!         Box::pin(async move { next.run(ctx, operation).await })
//!     }
//! }
//! ```

use palisade_core::{Operation, OperationContext, OperationResult};
use std::future::Future;
use std::pin::Pin;

/// A boxed future that resolves to an operation result.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The terminal handler invoked at the innermost end of the chain.
///
/// The handler receives the context by reference and must capture whatever
/// it needs before constructing its future; the returned future does not
/// borrow the context.
pub type HandlerFn<'a, O> = Box<
    dyn FnOnce(
            &OperationContext,
            O,
        ) -> BoxFuture<'static, OperationResult<<O as Operation>::Output>>
        + Send
        + 'a,
>;

/// A polymorphic interceptor wrapped around operation execution.
///
/// Behaviors receive the read-only [`OperationContext`], the operation by
/// value, and a [`Next`] link to delegate to the rest of the chain. A
/// behavior decides, before and/or after delegating, whether to proceed or
/// to short-circuit with a failure.
pub trait Behavior<O: Operation>: Send + Sync + 'static {
    /// Returns the unique name of this behavior.
    ///
    /// Used for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Processes the operation through this behavior.
    fn handle<'a>(
        &'a self,
        ctx: &'a OperationContext,
        operation: O,
        next: Next<'a, O>,
    ) -> BoxFuture<'a, OperationResult<O::Output>>;
}

/// The next link in the chain.
///
/// Passed to each behavior; calling [`Next::run`] continues processing.
/// `run` consumes `self`, so the next link can be invoked at most once per
/// execution. Not calling it short-circuits the chain.
pub struct Next<'a, O: Operation> {
    inner: NextInner<'a, O>,
}

enum NextInner<'a, O: Operation> {
    /// More behaviors to process.
    Link {
        behavior: &'a dyn Behavior<O>,
        next: Box<Next<'a, O>>,
    },
    /// End of chain: invoke the terminal handler.
    Handler(HandlerFn<'a, O>),
}

impl<'a, O: Operation> Next<'a, O> {
    /// Creates a link that will invoke the given behavior.
    pub(crate) fn link(behavior: &'a dyn Behavior<O>, next: Next<'a, O>) -> Self {
        Self {
            inner: NextInner::Link {
                behavior,
                next: Box::new(next),
            },
        }
    }

    /// Creates the terminal link that invokes the handler.
    pub(crate) fn handler<F>(f: F) -> Self
    where
        F: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>>
            + Send
            + 'a,
    {
        Self {
            inner: NextInner::Handler(Box::new(f)),
        }
    }

    /// Invokes the next behavior or the terminal handler.
    ///
    /// Consumes `self` so it can only be called once.
    pub async fn run(self, ctx: &'a OperationContext, operation: O) -> OperationResult<O::Output> {
        match self.inner {
            NextInner::Link { behavior, next } => behavior.handle(ctx, operation, *next).await,
            NextInner::Handler(handler) => handler(ctx, operation).await,
        }
    }
}
