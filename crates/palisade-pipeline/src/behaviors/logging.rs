//! Logging behavior.
//!
//! Records a debug-level start event and an info-level end event with
//! elapsed time for every execution. The end event fires even when the next
//! link fails; the failure then re-propagates unchanged.

use crate::behavior::{Behavior, BoxFuture, Next};
use palisade_core::{Operation, OperationContext, OperationResult};
use std::time::Instant;

/// Behavior that logs the start and end of every operation execution.
///
/// Emits exactly one "start" and one "end" record per execution. Elapsed
/// time is reported in seconds at millisecond precision.
#[derive(Debug, Clone, Default)]
pub struct LoggingBehavior;

impl LoggingBehavior {
    /// Creates a new logging behavior.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<O: Operation> Behavior<O> for LoggingBehavior {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn handle<'a>(
        &'a self,
        ctx: &'a OperationContext,
        operation: O,
        next: Next<'a, O>,
    ) -> BoxFuture<'a, OperationResult<O::Output>> {
        Box::pin(async move {
            tracing::debug!(
                request_id = %ctx.request_id(),
                operation = O::NAME,
                "handling operation"
            );

            let started = Instant::now();
            let result = next.run(ctx, operation).await;
            let elapsed_secs = started.elapsed().as_secs_f64();

            tracing::info!(
                request_id = %ctx.request_id(),
                operation = O::NAME,
                elapsed_secs = %format!("{elapsed_secs:.3}"),
                success = result.is_ok(),
                "handled operation"
            );

            result
        })
    }
}
