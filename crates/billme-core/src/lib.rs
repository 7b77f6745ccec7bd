//! # billme-core
//!
//! Shared error type and `Result` alias for the billme workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error and `Result` definitions.
pub mod errors;

pub use errors::{Error, Result};
