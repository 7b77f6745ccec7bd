//! Easter-date computation.
//!
//! Implements the Anonymous Gregorian (Meeus/Jones/Butcher) algorithm for
//! Easter Sunday.  The algorithm is valid for the years 1583–4099; the
//! `Date` type shares that range, so no separate guard is needed here.

use billme_core::errors::Result;
use billme_time::Date;

/// Compute the date of Easter Sunday for `year`.
///
/// Easter is the first Sunday after the first full moon occurring on or
/// after the spring equinox (March 21).  The intermediate quantities below
/// follow the published form of the algorithm; all divisions are truncating
/// integer divisions on non-negative operands.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;

    let golden_number = y % 19;
    let century = y / 100;
    let year_in_century = y % 100;

    let century_leap_correction = century / 4;
    let century_remainder = century % 4;

    let moon_orbit_correction = (century + 8) / 25;
    let moon_correction_adjustment = (century - moon_orbit_correction + 1) / 3;

    let epact = (19 * golden_number + century - century_leap_correction
        - moon_correction_adjustment
        + 15)
        % 30;

    let year_leap_correction = year_in_century / 4;
    let year_remainder = year_in_century % 4;

    let weekday_correction =
        (32 + 2 * century_remainder + 2 * year_leap_correction - epact - year_remainder) % 7;
    let month_correction =
        (golden_number + 11 * epact + 22 * weekday_correction) / 451;

    let month_and_day_sum = epact + weekday_correction - 7 * month_correction + 114;
    let month = (month_and_day_sum / 31) as u8;
    let day = (month_and_day_sum % 31 + 1) as u8;

    Date::from_ymd(year, month, day)
}

/// Compute the date of Easter Monday (the day after Easter Sunday) for
/// `year`, rolling over month and year boundaries as needed.
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
    }

    #[test]
    fn easter_monday_follows_sunday() {
        for year in [2024, 2025, 2026, 2030, 1999] {
            let sunday = easter_sunday(year).unwrap();
            let monday = easter_monday(year).unwrap();
            assert_eq!(sunday.days_between(monday), 1, "year {year}");
        }
    }

    #[test]
    fn easter_monday_rolls_over_march() {
        // Easter Sunday 2024 is March 31, so Easter Monday is April 1
        assert_eq!(easter_monday(2024).unwrap(), date(2024, 4, 1));
    }

    #[test]
    fn easter_always_in_window() {
        // Easter Sunday always falls between March 22 and April 25
        for year in (1583..=4099).step_by(97) {
            let e = easter_sunday(year).unwrap();
            let m = e.month();
            let d = e.day_of_month();
            assert!(
                (m == 3 && d >= 22) || (m == 4 && d <= 25),
                "Easter {year} fell on {e}"
            );
        }
    }

    #[test]
    fn range_boundaries() {
        assert!(easter_sunday(1583).is_ok());
        assert!(easter_sunday(4099).is_ok());
    }
}
