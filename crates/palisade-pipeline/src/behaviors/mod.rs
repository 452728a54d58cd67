//! Concrete behaviors plugged into the chain.
//!
//! Execution order, outward to inward:
//!
//! 1. [`logging`] - start/end records with elapsed time
//! 2. [`validation`] - declarative per-type rule sets
//! 3. [`authorization`] - capability check against the principal

pub mod authorization;
pub mod logging;
pub mod validation;

pub use authorization::AuthorizationBehavior;
pub use logging::LoggingBehavior;
pub use validation::{OperationValidator, RuleSet, ValidationBehavior};
