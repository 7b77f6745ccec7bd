//! Czech Republic holiday provider.
//!
//! The following public holidays are observed:
//! * New Year's Day (Jan 1)
//! * Easter Monday (movable)
//! * Labour Day (May 1)
//! * Liberation Day (May 8)
//! * Saints Cyril & Methodius Day (Jul 5)
//! * Jan Hus Day (Jul 6)
//! * Czech Statehood Day (Sep 28)
//! * Independence Day (Oct 28)
//! * Freedom & Democracy Day (Nov 17)
//! * Christmas Eve (Dec 24)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)

use billme_core::errors::Result;
use billme_time::Date;

use crate::easter::easter_monday;
use crate::provider::{Holiday, HolidayProvider};

/// The 11 fixed-date holidays as (name, month, day); the same month/day
/// every year.
const FIXED_HOLIDAYS: [(&str, u8, u8); 11] = [
    ("Nový rok", 1, 1),
    ("Svátek práce", 5, 1),
    ("Den vítězství", 5, 8),
    ("Den slovanských věrozvěstů Cyrila a Metoděje", 7, 5),
    ("Den upálení mistra Jana Husa", 7, 6),
    ("Den české státnosti", 9, 28),
    ("Den vzniku samostatného československého státu", 10, 28),
    ("Den boje za svobodu a demokracii", 11, 17),
    ("Štědrý den", 12, 24),
    ("1. svátek vánoční", 12, 25),
    ("2. svátek vánoční", 12, 26),
];

/// Czech Republic holiday provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct CzechRepublic;

impl HolidayProvider for CzechRepublic {
    fn name(&self) -> &str {
        "Czech Republic"
    }

    fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut list = Vec::with_capacity(FIXED_HOLIDAYS.len() + 1);
        for (name, month, day) in FIXED_HOLIDAYS {
            list.push(Holiday::new(name, Date::from_ymd(year, month, day)?));
        }
        list.push(Holiday::new("Velikonoční pondělí", easter_monday(year)?));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday_date<'a>(holidays: &'a [Holiday], name: &str) -> &'a Date {
        &holidays
            .iter()
            .find(|h| h.name == name)
            .unwrap_or_else(|| panic!("holiday {name:?} missing"))
            .date
    }

    #[test]
    fn twelve_holidays_every_year() {
        let provider = CzechRepublic;
        for year in [1583, 1900, 2024, 2025, 2077, 4099] {
            let holidays = provider.holidays(year).unwrap();
            assert_eq!(holidays.len(), 12, "year {year}");
        }
    }

    #[test]
    fn fixed_dates_2024() {
        let holidays = CzechRepublic.holidays(2024).unwrap();
        assert_eq!(*holiday_date(&holidays, "Nový rok"), date(2024, 1, 1));
        assert_eq!(*holiday_date(&holidays, "Svátek práce"), date(2024, 5, 1));
        assert_eq!(*holiday_date(&holidays, "Den vítězství"), date(2024, 5, 8));
        assert_eq!(*holiday_date(&holidays, "Štědrý den"), date(2024, 12, 24));
        assert_eq!(*holiday_date(&holidays, "1. svátek vánoční"), date(2024, 12, 25));
        assert_eq!(*holiday_date(&holidays, "2. svátek vánoční"), date(2024, 12, 26));
    }

    #[test]
    fn easter_monday_2024() {
        let holidays = CzechRepublic.holidays(2024).unwrap();
        assert_eq!(
            *holiday_date(&holidays, "Velikonoční pondělí"),
            date(2024, 4, 1)
        );
    }

    #[test]
    fn easter_monday_listed_after_fixed_holidays() {
        let holidays = CzechRepublic.holidays(2024).unwrap();
        let fixed = &holidays[..holidays.len() - 1];
        assert!(fixed.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(holidays.last().unwrap().name, "Velikonoční pondělí");
    }

    #[test]
    fn same_year_same_result() {
        let a = CzechRepublic.holidays(2025).unwrap();
        let b = CzechRepublic.holidays(2025).unwrap();
        assert_eq!(a, b);
    }
}
