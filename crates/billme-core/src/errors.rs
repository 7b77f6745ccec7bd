//! Error types for billme.
//!
//! The core computation accepts every input and produces a defined result;
//! the only failures that can surface are date-construction failures (a
//! year outside the supported window, or a month/day combination that does
//! not exist). Those are collected in a single `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout billme.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range year, invalid month or day).
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout billme.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::Date("month 13 out of range [1, 12]".into());
        assert_eq!(err.to_string(), "date error: month 13 out of range [1, 12]");
    }
}
