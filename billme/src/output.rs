//! Output formatting.
//!
//! One result, four renditions: bare number for piping, celebratory,
//! verbose, and the default. `--invoice-ready` wins over `--ka-ching`,
//! which wins over `--verbose`.

use billme_time::Month;

use crate::cli::Args;

/// Render the computed working-day count according to the output flags.
pub fn format(working_days: u32, month: Month, year: u16, args: &Args) -> String {
    if args.invoice_ready {
        format!("{working_days}")
    } else if args.ka_ching {
        format!("{working_days} days = CHA-CHING! 🤑")
    } else if args.verbose {
        format!("{month} {year}: {working_days} billable days 💸")
    } else {
        format!("💰 {working_days}")
    }
}
