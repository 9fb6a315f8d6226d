use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use fedholidays::time::utility::parse_date;

/// US federal holiday calendar.
#[derive(Parser)]
#[command(
    name = "fedholidays",
    version,
    about = "US federal holidays, observed dates and business days"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Named observance policy (Federal, FederalReserve, Actual, or one from the config).
    #[arg(short, long, global = true, default_value = "Federal")]
    pub policy: String,

    /// Keep Saturday holidays on Saturday instead of the preceding Friday.
    #[arg(long, global = true)]
    pub no_shift_saturday: bool,

    /// Keep Sunday holidays on Sunday instead of the following Monday.
    #[arg(long, global = true)]
    pub no_shift_sunday: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the observed holidays of a year.
    Year(YearArgs),
    /// Check whether a date is an observed holiday.
    Check(CheckArgs),
    /// List the observed holidays in a date range.
    Range(RangeArgs),
    /// Show the next business day after a date.
    Next(NextArgs),
}

#[derive(clap::Args)]
pub struct YearArgs {
    /// Calendar year (default: current year).
    pub year: Option<i32>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date as YYYY-MM-DD (default: today).
    #[arg(value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Take today's date from UTC instead of the local clock; only valid without DATE.
    #[arg(long, conflicts_with = "date")]
    pub utc: bool,
}

#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date of the range, inclusive (default: today).
    #[arg(value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Last date of the range, inclusive (default: one year after start).
    #[arg(value_parser = parse_date)]
    pub end: Option<NaiveDate>,
}

#[derive(clap::Args)]
pub struct NextArgs {
    /// Date as YYYY-MM-DD (default: today).
    #[arg(value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}
