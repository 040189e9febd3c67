//! Shared infrastructure for the Herodex HTTP service.
//!
//! This crate provides the HTTP glue between axum and `herodex-lib`:
//!
//! - [`AppState`]: the dependency-injected roster plus environment name
//! - [`ApiError`]: the uniform `{message, statusCode, status}` error body
//! - [`ApiSuccess`]: the uniform `{statusCode, data, status}` success body
//! - [`health`] / [`environment`]: stateless probe handlers
//! - [`logging`]: structured logging setup
//!
//! # Architecture
//!
//! The service follows a thin-handler pattern: all roster semantics live in
//! `herodex-lib`, and handlers only parse the request, run the validation
//! gate, call the roster, and wrap the outcome in one of the two envelopes.
//! [`from_lib_error`] is the single point where library errors become HTTP
//! status codes.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a seeded state and payload builders
//! for handler testing. Enable the `test-utils` feature to access it from
//! dependent crates.

#![deny(warnings)]

mod envelope;
mod error;
mod health;
pub mod logging;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use envelope::ApiSuccess;
pub use error::{from_lib_error, ApiError};
pub use health::{environment, health};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use state::AppState;
