//! The `billme` binary.

use clap::Parser;

use billme::cli::Args;
use billme::output;

fn main() {
    let args = Args::parse();
    let (month, year) = args.resolve();

    match billme::calculator::count_working_days_with_holidays_and_vacation(
        month.number(),
        year,
        "CZ",
        args.exclude_holidays,
        args.vacation_days,
    ) {
        Ok(working_days) => println!("{}", output::format(working_days, month, year, &args)),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
