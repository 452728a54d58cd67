//! Ordered behavior chain composition.
//!
//! A [`Chain`] wraps an ordered list of behaviors around a terminal handler.
//! The first behavior in the list is the outermost: composition happens back
//! to front, so each behavior wraps everything after it.
//!
//! The fixed order for this system, outward to inward, is:
//!
//! ```text
//! Operation → Logging → Validation → Authorization → Handler
//! ```
//!
//! Validation runs before authorization on purpose: malformed operations
//! fail before access checks are meaningful. [`Chain::standard`] builds this
//! order; do not reorder it.

use crate::behavior::{Behavior, BoxFuture, Next};
use crate::behaviors::{
    AuthorizationBehavior, LoggingBehavior, OperationValidator, ValidationBehavior,
};
use palisade_core::{Operation, OperationContext, OperationResult};
use std::sync::Arc;

/// A type-erased behavior that can be stored in a chain.
pub type BoxedBehavior<O> = Arc<dyn Behavior<O>>;

/// An ordered sequence of behaviors around a terminal handler.
///
/// # Example
///
/// ```
/// use palisade_core::{Operation, OperationContext};
/// use palisade_pipeline::{Chain, RuleSet};
/// use std::sync::Arc;
///
/// struct Echo(String);
///
/// impl Operation for Echo {
///     type Output = String;
///     const NAME: &'static str = "Echo";
/// }
///
/// # tokio_test::block_on(async {
/// let chain = Chain::standard(Arc::new(RuleSet::<Echo>::new()));
/// let ctx = OperationContext::new("/echo");
///
/// let result = chain
///     .execute(&ctx, Echo("hello".into()), |_ctx, op| {
///         Box::pin(async move { Ok(op.0) })
///     })
///     .await;
///
/// assert_eq!(result.unwrap(), "hello");
/// # });
/// ```
pub struct Chain<O: Operation> {
    behaviors: Vec<BoxedBehavior<O>>,
}

impl<O: Operation> Chain<O> {
    /// Creates a new chain builder.
    #[must_use]
    pub fn builder() -> ChainBuilder<O> {
        ChainBuilder::new()
    }

    /// Builds the standard chain for this system: Logging → Validation →
    /// Authorization, in that fixed order.
    #[must_use]
    pub fn standard(validator: Arc<dyn OperationValidator<O>>) -> Self {
        Self::builder()
            .behavior(LoggingBehavior::new())
            .behavior(ValidationBehavior::new(validator))
            .behavior(AuthorizationBehavior::new())
            .build()
    }

    /// Executes an operation through the chain.
    ///
    /// The operation flows through the behaviors in configured order and
    /// then into the terminal handler; any behavior may short-circuit by
    /// returning a failure without invoking its next link.
    pub async fn execute<H>(
        &self,
        ctx: &OperationContext,
        operation: O,
        handler: H,
    ) -> OperationResult<O::Output>
    where
        H: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>> + Send,
    {
        let next = self.build_links(handler);
        next.run(ctx, operation).await
    }

    /// Builds the linked chain for one execution, back to front.
    fn build_links<'a, H>(&'a self, handler: H) -> Next<'a, O>
    where
        H: FnOnce(&OperationContext, O) -> BoxFuture<'static, OperationResult<O::Output>>
            + Send
            + 'a,
    {
        let mut next = Next::handler(handler);
        for behavior in self.behaviors.iter().rev() {
            next = Next::link(behavior.as_ref(), next);
        }
        next
    }

    /// Returns the names of the behaviors in execution order.
    #[must_use]
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    /// Returns the number of behaviors in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Returns `true` if the chain has no behaviors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

/// Builder for constructing a [`Chain`].
pub struct ChainBuilder<O: Operation> {
    behaviors: Vec<BoxedBehavior<O>>,
}

impl<O: Operation> ChainBuilder<O> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
        }
    }

    /// Appends a behavior. The first appended behavior is the outermost.
    #[must_use]
    pub fn behavior<B: Behavior<O>>(mut self, behavior: B) -> Self {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    /// Builds the chain.
    #[must_use]
    pub fn build(self) -> Chain<O> {
        Chain {
            behaviors: self.behaviors,
        }
    }
}

impl<O: Operation> Default for ChainBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}
