//! # billme-calculator
//!
//! Working-day counting for one calendar month, with optional public-holiday
//! exclusion and vacation-day subtraction.
//!
//! All functions are pure: no clock, no I/O, no shared state.  Each call is
//! independent and safe to make from any number of threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use billme_core::errors::Result;
use billme_holidays::{is_holiday, provider_for, Holiday};
use billme_time::Date;

/// Count the Monday–Friday days in the given month.
///
/// Equivalent to [`count_working_days_with_holidays`] with holiday exclusion
/// disabled.
pub fn count_working_days(month: u8, year: u16) -> Result<u32> {
    count_working_days_with_holidays(month, year, "", false)
}

/// Count the working days in the given month, excluding the public holidays
/// of `country` when `exclude_holidays` is set.
///
/// Equivalent to [`count_working_days_with_holidays_and_vacation`] with zero
/// vacation days.
pub fn count_working_days_with_holidays(
    month: u8,
    year: u16,
    country: &str,
    exclude_holidays: bool,
) -> Result<u32> {
    count_working_days_with_holidays_and_vacation(month, year, country, exclude_holidays, 0)
}

/// Count the billable working days in the given month.
///
/// A day is billable iff it is a Monday–Friday and, when `exclude_holidays`
/// is set, not a public holiday of `country`.  `vacation_days` is subtracted
/// from the total afterwards and the result is floored at zero.
///
/// Month validity (1–12) is the caller's responsibility; an out-of-range
/// month surfaces as the date-construction error rather than being validated
/// here.  A negative `vacation_days` is not rejected and simply increases
/// the result.
pub fn count_working_days_with_holidays_and_vacation(
    month: u8,
    year: u16,
    country: &str,
    exclude_holidays: bool,
    vacation_days: i32,
) -> Result<u32> {
    let first = Date::from_ymd(year, month, 1)?;
    let last = first.end_of_month();

    let holidays: Vec<Holiday> = if exclude_holidays && !country.is_empty() {
        provider_for(country).holidays(year)?
    } else {
        Vec::new()
    };

    let mut working_days = 0i32;
    let mut day = first;
    loop {
        if day.weekday().is_working_day() && !(exclude_holidays && is_holiday(day, &holidays)) {
            working_days += 1;
        }
        if day == last {
            break;
        }
        day += 1;
    }

    // Subtract vacation days, but don't go below 0
    Ok((working_days - vacation_days).max(0) as u32)
}
