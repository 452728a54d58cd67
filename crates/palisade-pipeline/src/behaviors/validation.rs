//! Validation behavior.
//!
//! Runs the declarative rule set associated with the operation's type. Any
//! violation short-circuits the chain with
//! [`PalisadeError::Validation`]; the next link is never invoked.
//!
//! The rule set is supplied by the caller per operation type, behind the
//! [`OperationValidator`] seam.

use crate::behavior::{Behavior, BoxFuture, Next};
use palisade_core::{FieldViolations, Operation, OperationContext, OperationResult, PalisadeError};
use std::sync::Arc;

/// Supplies the validation rules for an operation type.
pub trait OperationValidator<O: Operation>: Send + Sync + 'static {
    /// Checks the operation, returning every field-level violation found.
    fn validate(&self, operation: &O) -> Result<(), FieldViolations>;
}

/// A declarative set of field rules for one operation type.
///
/// Each rule names a field, a predicate that must hold, and the message
/// recorded when it does not. All rules run; violations accumulate rather
/// than stopping at the first failure.
///
/// # Example
///
/// ```
/// use palisade_core::Operation;
/// use palisade_pipeline::{OperationValidator, RuleSet};
///
/// struct CreateUser {
///     email: String,
/// }
///
/// impl Operation for CreateUser {
///     type Output = ();
///     const NAME: &'static str = "CreateUser";
/// }
///
/// let rules = RuleSet::new()
///     .rule("email", "must not be empty", |op: &CreateUser| !op.email.is_empty())
///     .rule("email", "must contain '@'", |op: &CreateUser| op.email.contains('@'));
///
/// assert!(rules.validate(&CreateUser { email: "a@b".into() }).is_ok());
/// assert!(rules.validate(&CreateUser { email: String::new() }).is_err());
/// ```
pub struct RuleSet<O> {
    rules: Vec<Rule<O>>,
}

struct Rule<O> {
    field: &'static str,
    message: &'static str,
    check: Box<dyn Fn(&O) -> bool + Send + Sync>,
}

impl<O> RuleSet<O> {
    /// Creates an empty rule set. An empty set accepts every operation.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule: `check` must return `true` for the operation to pass.
    #[must_use]
    pub fn rule(
        mut self,
        field: &'static str,
        message: &'static str,
        check: impl Fn(&O) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            message,
            check: Box::new(check),
        });
        self
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<O> Default for RuleSet<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Operation> OperationValidator<O> for RuleSet<O> {
    fn validate(&self, operation: &O) -> Result<(), FieldViolations> {
        let mut violations = FieldViolations::new();
        for rule in &self.rules {
            if !(rule.check)(operation) {
                violations.add(rule.field, rule.message);
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Behavior that validates operations before they reach the handler.
pub struct ValidationBehavior<O: Operation> {
    validator: Arc<dyn OperationValidator<O>>,
}

impl<O: Operation> ValidationBehavior<O> {
    /// Creates a validation behavior over the given validator.
    #[must_use]
    pub fn new(validator: Arc<dyn OperationValidator<O>>) -> Self {
        Self { validator }
    }
}

impl<O: Operation> Behavior<O> for ValidationBehavior<O> {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn handle<'a>(
        &'a self,
        ctx: &'a OperationContext,
        operation: O,
        next: Next<'a, O>,
    ) -> BoxFuture<'a, OperationResult<O::Output>> {
        Box::pin(async move {
            match self.validator.validate(&operation) {
                Ok(()) => next.run(ctx, operation).await,
                Err(violations) => {
                    tracing::warn!(
                        request_id = %ctx.request_id(),
                        operation = O::NAME,
                        violation_count = violations.len(),
                        "validation failed"
                    );
                    Err(PalisadeError::validation(O::NAME, violations))
                }
            }
        })
    }
}
