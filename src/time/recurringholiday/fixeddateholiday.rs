use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// Holiday on the same month and day every year, e.g. July 4.
#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_every_year() {
        let christmas = FixedDateHoliday::new(12, 25);
        assert_eq!(christmas.actual_date(2016), NaiveDate::from_ymd_opt(2016, 12, 25));
        assert!(christmas.is_actual_holiday(&NaiveDate::from_ymd_opt(1999, 12, 25).unwrap()));
        assert!(!christmas.is_actual_holiday(&NaiveDate::from_ymd_opt(1999, 12, 26).unwrap()));
    }

    #[test]
    fn impossible_day_yields_nothing() {
        assert_eq!(FixedDateHoliday::new(2, 30).actual_date(2024), None);
    }
}
