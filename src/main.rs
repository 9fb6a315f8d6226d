mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use serde_json::json;
use tracing::info;

use fedholidays::configuration::Configuration;
use fedholidays::federalholidays::DateFields;
use fedholidays::time::calendar::businessdaycalendar::BusinessDayCalendar;
use fedholidays::time::calendar::holiday::Holiday;
use fedholidays::time::calendar::holidayquery::HolidayQuery;
use fedholidays::time::clock::{Clock, SystemClock};
use fedholidays::time::utility::one_year_after;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Configuration::new();
    if let Some(path) = &cli.config {
        config
            .from_reader(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    }

    let mut policy = config
        .policy(&cli.policy)
        .with_context(|| format!("unknown observance policy '{}'", cli.policy))?;
    if cli.no_shift_saturday {
        policy.shift_saturday_holidays = false;
    }
    if cli.no_shift_sunday {
        policy.shift_sunday_holidays = false;
    }
    info!(?policy, "observance policy");

    let query = config.query(policy);
    let clock = SystemClock;

    let report = match cli.command {
        Command::Year(args) => {
            let year = args.year.unwrap_or_else(|| clock.today().year());
            holidays_report(&query.observed_holidays_for_year(year), cli.json)?
        },
        Command::Check(args) => {
            let fields = if args.utc { DateFields::Utc } else { DateFields::Local };
            let date = args.date.unwrap_or_else(|| fields.calendar_date(&clock.now()));
            check_report(&query, date, cli.json)?
        },
        Command::Range(args) => {
            let start = args.start.unwrap_or_else(|| clock.today());
            let end = args.end.unwrap_or_else(|| one_year_after(start));
            holidays_report(&query.holidays_in_range(start, end), cli.json)?
        },
        Command::Next(args) => {
            let date = args.date.unwrap_or_else(|| clock.today());
            next_report(&query, date, cli.json)?
        }
    };
    if !report.is_empty() {
        println!("{report}");
    }
    Ok(())
}

fn check_report(query: &HolidayQuery, date: NaiveDate, as_json: bool) -> Result<String> {
    let holidays = query.holidays_in_range(date, date);
    if as_json {
        let value = json!({
            "date": date,
            "isHoliday": query.is_holiday(date),
            "holidays": holidays
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    if holidays.is_empty() {
        Ok(format!("{date} is not an observed federal holiday"))
    } else {
        let names: Vec<&str> = holidays.iter().map(Holiday::name).collect();
        Ok(format!("{date} is an observed federal holiday ({})", names.join(", ")))
    }
}

fn next_report(query: &HolidayQuery, date: NaiveDate, as_json: bool) -> Result<String> {
    let next = query
        .next_business_day(date)
        .with_context(|| format!("no business day after {date}"))?;
    if as_json {
        Ok(json!({"date": date, "nextBusinessDay": next}).to_string())
    } else {
        Ok(next.to_string())
    }
}

fn holidays_report(holidays: &[Holiday], as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(holidays)?);
    }
    let lines: Vec<String> = holidays.iter().map(Holiday::to_string).collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use fedholidays::time::recurringholiday::weekendadjustment::ObservancePolicy;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn federal_query() -> HolidayQuery {
        Configuration::new().query(ObservancePolicy::FEDERAL)
    }

    #[test]
    fn check_reports_observed_holiday() {
        let report = check_report(&federal_query(), ymd(2010, 12, 31), false).unwrap();
        assert_eq!(report, "2010-12-31 is an observed federal holiday (New Year's Day)");

        let report = check_report(&federal_query(), ymd(2011, 12, 31), false).unwrap();
        assert_eq!(report, "2011-12-31 is not an observed federal holiday");
    }

    #[test]
    fn check_json_shape() {
        let report = check_report(&federal_query(), ymd(2015, 7, 3), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["date"], "2015-07-03");
        assert_eq!(value["isHoliday"], true);
        assert_eq!(value["holidays"][0]["name"], "Independence Day");
        assert_eq!(value["holidays"][0]["dateString"], "2015-7-3");
    }

    #[test]
    fn range_lists_one_holiday_per_line() {
        let query = federal_query();
        let report = holidays_report(&query.holidays_in_range(ymd(2015, 12, 1), ymd(2016, 1, 31)), false).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines, vec![
            "2015-12-25\tChristmas Day",
            "2016-1-1\tNew Year's Day",
            "2016-1-18\tBirthday of Martin Luther King, Jr.",
        ]);

        let empty = holidays_report(&query.holidays_in_range(ymd(2015, 8, 1), ymd(2015, 8, 31)), false).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn range_json_is_an_array() {
        let query = federal_query();
        let report = holidays_report(&query.holidays_in_range(ymd(2015, 7, 1), ymd(2015, 7, 31)), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn next_skips_weekend_and_holiday() {
        let query = federal_query();
        assert_eq!(next_report(&query, ymd(2015, 7, 2), false).unwrap(), "2015-07-06");
        let report = next_report(&query, ymd(2015, 7, 2), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["nextBusinessDay"], "2015-07-06");
    }

    #[test]
    fn next_past_last_date_is_an_error() {
        assert!(next_report(&federal_query(), NaiveDate::MAX, false).is_err());
    }
}
