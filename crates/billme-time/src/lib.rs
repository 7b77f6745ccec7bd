//! # billme-time
//!
//! Calendrical foundation for billme: a serial-number `Date` type plus
//! `Weekday` and `Month` enums.
//!
//! All types here are plain calendar values — there is no time-of-day and
//! no timezone anywhere in this crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use weekday::Weekday;
