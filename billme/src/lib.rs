//! # billme
//!
//! Billable working-day calculator: given a month and year, count the
//! Monday–Friday days, optionally excluding Czech public holidays and
//! subtracting vacation days.
//!
//! This crate is a **façade** over the workspace member crates plus the
//! command-line layer.  Library users should depend on this crate rather
//! than the individual `billme-*` crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub use billme_core as core;

/// Date, weekday, and month types.
pub use billme_time as time;

/// Holiday providers and Easter computation.
pub use billme_holidays as holidays;

/// Working-day counting.
pub use billme_calculator as calculator;

/// Command-line argument definitions.
pub mod cli;

/// Output formatting.
pub mod output;
