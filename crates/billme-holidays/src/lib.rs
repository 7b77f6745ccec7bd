//! # billme-holidays
//!
//! Public-holiday providers: the `HolidayProvider` trait, the Czech
//! provider, and the Gregorian Easter computation that drives the one
//! movable holiday.
//!
//! Everything here is a pure function of its inputs — a holiday list is
//! built fresh on every query and owned by the caller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Country-specific provider implementations.
pub mod czech_republic;

/// Easter-date computation.
pub mod easter;

/// `Holiday` type, `HolidayProvider` trait, and provider resolution.
pub mod provider;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use czech_republic::CzechRepublic;
pub use easter::{easter_monday, easter_sunday};
pub use provider::{is_holiday, provider_for, Holiday, HolidayProvider};
