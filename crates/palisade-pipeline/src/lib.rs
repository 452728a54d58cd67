//! # Palisade Pipeline
//!
//! Ordered behavior chain for the Palisade request pipeline.
//!
//! A [`Chain`] wraps an ordered sequence of [`Behavior`]s around a terminal
//! handler. Behaviors nest: the first in the list is the outermost, and each
//! one decides whether to delegate to its [`Next`] link or to short-circuit
//! with a failure. Failures are values ([`OperationResult`]), never panics.
//!
//! ## Fixed order
//!
//! ```text
//! Operation → Logging → Validation → Authorization → Handler
//! ```
//!
//! Validation runs before authorization: malformed operations fail before
//! access checks are meaningful.
//!
//! ## Concurrency
//!
//! A chain execution is sequential per request; behaviors nest, they do not
//! fan out. Chains hold only `Arc`'d behaviors and are safe to share across
//! concurrent requests. Cancellation propagates by dropping the composed
//! future: every nested link is a sub-future of the outermost one, and no
//! behavior detaches work that would outlive it.
//!
//! [`OperationResult`]: palisade_core::OperationResult

#![doc(html_root_url = "https://docs.rs/palisade-pipeline/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod behavior;
pub mod behaviors;
mod chain;

pub use behavior::{Behavior, BoxFuture, HandlerFn, Next};
pub use behaviors::{
    AuthorizationBehavior, LoggingBehavior, OperationValidator, RuleSet, ValidationBehavior,
};
pub use chain::{BoxedBehavior, Chain, ChainBuilder};
