//! Command-line argument definitions.

use billme_time::Month;
use chrono::Datelike;
use clap::Parser;

/// billme — your billable days calculator 💸
#[derive(Parser, Debug)]
#[command(
    name = "billme",
    version,
    about = "💸 BILLME - Your billable days calculator! 💸",
    long_about = "Stop counting on your fingers - let me bill you properly!",
    after_help = "\
Examples:
  billme                    # Current month
  billme 7                  # July this year
  billme 7 2024             # July 2024
  billme -v 7 2024          # Verbose output
  billme -x -d 5 7          # Exclude holidays, 5 vacation days"
)]
pub struct Args {
    /// Month to count (1-12); defaults to the current month
    #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Year; defaults to the current year
    #[arg(value_parser = clap::value_parser!(u16).range(1583..=4099))]
    pub year: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Exclude Czech public holidays from working days
    #[arg(short = 'x', long)]
    pub exclude_holidays: bool,

    /// Number of vacation/time-off days to subtract
    #[arg(short = 'd', long, value_name = "NUM", default_value_t = 0)]
    pub vacation_days: i32,

    /// Celebratory output
    #[arg(long)]
    pub ka_ching: bool,

    /// Clean number only (for piping)
    #[arg(long)]
    pub invoice_ready: bool,
}

impl Args {
    /// Resolve the month and year to compute for, falling back to the
    /// current month and year where the positionals were omitted.
    pub fn resolve(&self) -> (Month, u16) {
        let now = chrono::Local::now();
        let month = self.month.unwrap_or(now.month() as u8);
        let year = self.year.unwrap_or(now.year() as u16);
        let month = Month::from_number(month).expect("month range enforced by clap");
        (month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_and_year() {
        let args = Args::try_parse_from(["billme", "7", "2024"]).unwrap();
        assert_eq!(args.month, Some(7));
        assert_eq!(args.year, Some(2024));
        assert!(!args.exclude_holidays);
        assert_eq!(args.vacation_days, 0);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["billme", "-x", "-d", "5", "7"]).unwrap();
        assert_eq!(args.month, Some(7));
        assert_eq!(args.year, None);
        assert!(args.exclude_holidays);
        assert_eq!(args.vacation_days, 5);
    }

    #[test]
    fn parses_long_flags() {
        let args = Args::try_parse_from([
            "billme",
            "--exclude-holidays",
            "--vacation-days",
            "3",
            "--invoice-ready",
            "12",
            "2025",
        ])
        .unwrap();
        assert!(args.exclude_holidays);
        assert_eq!(args.vacation_days, 3);
        assert!(args.invoice_ready);
        assert_eq!(args.month, Some(12));
        assert_eq!(args.year, Some(2025));
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(Args::try_parse_from(["billme", "0"]).is_err());
        assert!(Args::try_parse_from(["billme", "13"]).is_err());
        assert!(Args::try_parse_from(["billme", "july"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_year() {
        assert!(Args::try_parse_from(["billme", "7", "1500"]).is_err());
        assert!(Args::try_parse_from(["billme", "7", "5000"]).is_err());
    }

    #[test]
    fn rejects_too_many_arguments() {
        assert!(Args::try_parse_from(["billme", "7", "2024", "extra"]).is_err());
    }

    #[test]
    fn resolve_uses_given_values() {
        let args = Args::try_parse_from(["billme", "7", "2024"]).unwrap();
        let (month, year) = args.resolve();
        assert_eq!(month, Month::July);
        assert_eq!(year, 2024);
    }

    #[test]
    fn resolve_defaults_are_in_range() {
        let args = Args::try_parse_from(["billme"]).unwrap();
        let (month, year) = args.resolve();
        assert!((1..=12).contains(&month.number()));
        assert!((1583..=4099).contains(&year));
    }
}
