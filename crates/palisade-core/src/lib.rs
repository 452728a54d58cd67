//! # Palisade Core
//!
//! Core types for the Palisade request pipeline.
//!
//! This crate provides the foundational types shared by every other
//! Palisade crate:
//!
//! - [`OperationContext`] - Per-request context carrying identity and timing
//! - [`RequestId`] - UUID v7 request identifier
//! - [`Principal`] - Authenticated caller identity
//! - [`Operation`] - The typed unit-of-work contract
//! - [`PalisadeError`] - Standard error type for pipeline failures
//! - [`ProblemResponse`] - RFC 7807 problem document payload

#![doc(html_root_url = "https://docs.rs/palisade-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
mod operation;
mod principal;
mod problem;

pub use context::{OperationContext, RequestId};
pub use error::{FieldViolations, OperationResult, PalisadeError};
pub use operation::Operation;
pub use principal::Principal;
pub use problem::ProblemResponse;
