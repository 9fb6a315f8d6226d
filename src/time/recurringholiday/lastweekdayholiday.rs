use chrono::{NaiveDate, Weekday};

use crate::time::utility::last_weekday_of_month;
use super::recurringholiday::RecurringHoliday;

/// Holiday on the last given weekday of a month, e.g. the last Monday of May.
#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub const fn new(month: u32, weekday: Weekday) -> LastWeekdayHoliday {
        LastWeekdayHoliday { month, weekday }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        last_weekday_of_month(self.weekday, self.month, year)
    }
}
