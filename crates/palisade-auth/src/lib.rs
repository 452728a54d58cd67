//! # Palisade Auth
//!
//! Shared-secret credential verification for the Palisade pipeline.
//!
//! This crate implements the transport-layer gate that every request passes
//! through before being mapped to an operation:
//!
//! - [`CredentialSet`] - the immutable allow-list of valid API keys
//! - [`ApiKeyVerifier`] - extracts and checks the `x-api-key` header
//! - [`AuthenticationOutcome`] / [`AuthFailure`] - the verification result
//!
//! The verifier is deterministic and side-effect free apart from logging:
//! re-running it on the same request and configuration always produces the
//! same outcome.

#![doc(html_root_url = "https://docs.rs/palisade-auth/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod credentials;
mod verifier;

pub use credentials::CredentialSet;
pub use verifier::{ApiKeyVerifier, AuthFailure, AuthenticationOutcome, API_KEY_HEADER};
