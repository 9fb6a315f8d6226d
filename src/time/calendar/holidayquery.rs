use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;
use crate::time::calendar::federalcalendar::FederalCalendar;
use crate::time::calendar::holiday::Holiday;
use crate::time::recurringholiday::weekendadjustment::ObservancePolicy;

/// Membership and range queries over a [`FederalCalendar`] under one
/// observance policy.
#[derive(Clone)]
pub struct HolidayQuery {
    calendar: Arc<FederalCalendar>,
    policy: ObservancePolicy
}

impl HolidayQuery {
    pub fn new(calendar: Arc<FederalCalendar>, policy: ObservancePolicy) -> HolidayQuery {
        HolidayQuery { calendar, policy }
    }

    pub fn calendar(&self) -> &Arc<FederalCalendar> {
        &self.calendar
    }

    pub fn policy(&self) -> ObservancePolicy {
        self.policy
    }

    pub fn observed_holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        self.calendar.observed_holidays_for_year(year, self.policy)
    }

    /// Observed holidays that can land on a date of `year`: the year's own
    /// list plus next year's New Year's Day when it is observed on December 31.
    fn candidates(&self, year: i32) -> Vec<Holiday> {
        let mut candidates = self.observed_holidays_for_year(year);
        if let Some(next_year) = year.checked_add(1) {
            if let Some(new_year) = self.observed_holidays_for_year(next_year).into_iter().next() {
                if new_year.date().year() == year {
                    candidates.push(new_year);
                }
            }
        }
        candidates
    }

    /// True when `d` is the observed date of some federal holiday.
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.candidates(d.year()).iter().any(|h| h.date() == d)
    }

    /// Observed holidays with `start <= date <= end`, in chronological rule order.
    pub fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        if start > end {
            return Vec::new();
        }

        // One extra year so that a New Year's Day observed on December 31 of
        // `end.year()` is not lost.
        let last_year = end.year().saturating_add(1);
        let holidays: Vec<Holiday> = (start.year()..=last_year)
            .flat_map(|year| self.observed_holidays_for_year(year))
            .filter(|h| h.date() >= start && h.date() <= end)
            .collect();
        trace!(%start, %end, n = holidays.len(), "holidays in range");
        holidays
    }
}

impl BusinessDayCalendar for HolidayQuery {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        HolidayQuery::is_holiday(self, d)
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        self.candidates(year)
            .iter()
            .map(Holiday::date)
            .filter(|d| d.year() == year)
            .collect()
    }
}
