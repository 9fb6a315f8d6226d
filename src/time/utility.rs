use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::manager::managererror::ManagerError;

const ONE_WEEK: Days = Days::new(7);

#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-indexed) of `year`, or 0 when `month` is not 1..=12.
pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Date of the `n`-th (1-indexed) `weekday` in `month` of `year`.
///
/// Starts from the weekday of the 1st, moves forward 0 to 6 days to the first
/// matching weekday, then adds `n - 1` weeks. Returns `None` when `n` is zero,
/// the month does not exist, or the requested occurrence runs past month end.
pub fn nth_weekday_of_month(n: u8, weekday: Weekday, month: u32, year: i32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_sunday() + 7
                  - first_of_month.weekday().num_days_from_sunday()) % 7;
    let day = 1 + offset + 7 * (n as u32 - 1);

    if day > days_of_month(year, month) {
        None
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Date of the last `weekday` in `month` of `year`.
///
/// Walks forward one week at a time from the first occurrence until the next
/// step would leave the month, so months holding four or five occurrences
/// both resolve correctly.
pub fn last_weekday_of_month(weekday: Weekday, month: u32, year: i32) -> Option<NaiveDate> {
    let mut last = nth_weekday_of_month(1, weekday, month, year)?;
    while let Some(next) = last.checked_add_days(ONE_WEEK) {
        if next.month() != month {
            break;
        }
        last = next;
    }
    Some(last)
}

/// Same month and day one year later; February 29 lands on February 28.
pub fn one_year_after(d: NaiveDate) -> NaiveDate {
    d.checked_add_months(Months::new(12)).unwrap_or(NaiveDate::MAX)
}

/// Parses an ISO `YYYY-MM-DD` date, rejecting anything else.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ManagerError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|error| ManagerError::DateParseError {
            input: date_str.to_owned(),
            source: error
        })
}
