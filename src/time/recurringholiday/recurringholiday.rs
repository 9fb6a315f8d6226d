use chrono::{Datelike, NaiveDate};

/// A rule that places a holiday on one actual (unadjusted) date per year.
pub trait RecurringHoliday: Send + Sync {

    /// The actual date in `year`, or `None` when the rule cannot produce one.
    fn actual_date(&self, year: i32) -> Option<NaiveDate>;

    fn is_actual_holiday(&self, d: &NaiveDate) -> bool {
        self.actual_date(d.year()) == Some(*d)
    }
}
