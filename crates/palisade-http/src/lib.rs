//! # Palisade HTTP
//!
//! Transport boundary for the Palisade pipeline.
//!
//! This crate owns everything that touches the wire shape of failures:
//!
//! - [`ErrorTranslator`] - the single catch/dispatch mapping pipeline
//!   failures to RFC 7807 problem responses (401/400/403/500)
//! - [`Gateway`] - composition glue wiring verifier → chain → translator
//!   for one request
//! - [`Request`] / [`Response`] type aliases used at the boundary
//!
//! Route registration, controller dispatch, and response serialization for
//! the success path are external collaborators: the gateway hands back the
//! typed handler output untouched.

#![doc(html_root_url = "https://docs.rs/palisade-http/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod gateway;
mod translator;
mod types;

pub use gateway::{GateOutcome, Gateway};
pub use translator::ErrorTranslator;
pub use types::{problem_response, Request, Response, CHALLENGE, PROBLEM_CONTENT_TYPE};
