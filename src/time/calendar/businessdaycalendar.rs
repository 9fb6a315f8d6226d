use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::time::utility::days_of_month;

const ONE_DAY: Days = Days::new(1);

/// Business-day arithmetic over a set of observed holidays.
///
/// Saturdays and Sundays are never business days; implementors only say
/// which other dates are holidays.
pub trait BusinessDayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Observed holiday dates that fall inside `year`.
    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }

    /// Moves `n` business days away from `horizon`; backwards when `n` is negative.
    ///
    /// `None` when the walk runs off the representable date range.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        let shift_one_day: fn(NaiveDate) -> Option<NaiveDate> = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_business_day(d) as u32;
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let mut eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))?;
        while !self.is_business_day(eom) {
            eom = eom.checked_sub_days(ONE_DAY)?;
        }
        Some(eom)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let mut fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        while !self.is_business_day(fom) {
            fom = fom.checked_add_days(ONE_DAY)?;
        }
        Some(fom)
    }

    /// Business days in `(start, end]`; negative when `end` precedes `start`.
    fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let (from, to, sign) = if start <= end { (start, end, 1) } else { (end, start, -1) };
        let count = from
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= to)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;
        sign * count
    }
}
