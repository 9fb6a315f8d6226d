use chrono::{
    NaiveDate,
    Weekday
};

use crate::time::utility::nth_weekday_of_month;
use super::recurringholiday::RecurringHoliday;

/// Holiday on the n-th given weekday of a month, e.g. the 4th Thursday of November.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub const fn new(month: u32, n: u8, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, n, weekday }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        nth_weekday_of_month(self.n, self.weekday, self.month, year)
    }
}
