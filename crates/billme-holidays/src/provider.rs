//! `Holiday` type, `HolidayProvider` trait, and provider resolution.

use billme_core::errors::Result;
use billme_time::Date;

use crate::czech_republic::CzechRepublic;

/// A public holiday: a human-readable name and the calendar date it falls
/// on in a particular year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// Human-readable label; not semantically load-bearing.
    pub name: String,
    /// The calendar date of the holiday.
    pub date: Date,
}

impl Holiday {
    /// Create a holiday from a name and a date.
    pub fn new(name: impl Into<String>, date: Date) -> Self {
        Holiday {
            name: name.into(),
            date,
        }
    }
}

/// A source of public holidays for one country.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the country this provider covers.
    fn name(&self) -> &str;

    /// Return the full list of public holidays for `year`: the fixed-date
    /// holidays in calendar order, followed by any movable holidays.  The
    /// list is built fresh on every call; providers hold no state and
    /// perform no I/O.
    fn holidays(&self, year: u16) -> Result<Vec<Holiday>>;
}

/// Resolve a country identifier to its holiday provider.
///
/// Every country code — including unrecognised or empty ones — currently
/// resolves to the Czech provider.  Unknown codes are deliberately not an
/// error; this keeps the resolution step in place for future per-country
/// dispatch without changing the calculator's contract.
pub fn provider_for(_country: &str) -> &'static dyn HolidayProvider {
    &CzechRepublic
}

/// Return `true` iff `date` appears in `holidays`.
///
/// Dates carry no time-of-day, so plain date equality is exactly the
/// year/month/day comparison the contract asks for.
pub fn is_holiday(date: Date, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.date == date)
}
