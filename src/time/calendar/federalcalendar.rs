use std::sync::Arc;

use chrono::Weekday;

use crate::time::calendar::holiday::Holiday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::weekendadjustment::{ObservancePolicy, apply_shift};

/// First year in which Juneteenth National Independence Day was observed.
pub const JUNETEENTH_ENACTMENT_YEAR: i32 = 2021;

pub const JUNETEENTH: &str = "Juneteenth National Independence Day";

/// A named holiday rule, optionally only in force from a given year.
#[derive(Clone)]
pub struct FederalHoliday {
    name: &'static str,
    also_observed_as: Option<&'static str>,
    rule: Arc<dyn RecurringHoliday>,
    first_year: Option<i32>
}

impl FederalHoliday {
    pub fn new(name: &'static str, rule: Arc<dyn RecurringHoliday>) -> FederalHoliday {
        FederalHoliday { name, also_observed_as: None, rule, first_year: None }
    }

    pub fn also_observed_as(mut self, alias: &'static str) -> FederalHoliday {
        self.also_observed_as = Some(alias);
        self
    }

    pub fn from_year(mut self, year: i32) -> FederalHoliday {
        self.first_year = Some(year);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }

    pub fn first_year(&self) -> Option<i32> {
        self.first_year
    }

    pub fn is_in_force(&self, year: i32) -> bool {
        self.first_year.is_none_or(|first| year >= first)
    }

    /// The holiday on its actual date in `year`, if the rule applies that year.
    pub fn actual_holiday(&self, year: i32) -> Option<Holiday> {
        if !self.is_in_force(year) {
            return None;
        }
        self.rule
            .actual_date(year)
            .map(|d| Holiday::new(self.name, self.also_observed_as.map(str::to_owned), d))
    }
}

/// The US federal holiday rule set, in calendar order.
#[derive(Clone)]
pub struct FederalCalendar {
    holidays: Vec<FederalHoliday>
}

impl FederalCalendar {
    pub fn new(juneteenth_enactment_year: i32) -> FederalCalendar {
        let holidays = vec![
            FederalHoliday::new("New Year's Day", Arc::new(FixedDateHoliday::new(1, 1))),
            FederalHoliday::new(
                "Birthday of Martin Luther King, Jr.",
                Arc::new(NthWeekdayHoliday::new(1, 3, Weekday::Mon))
            ),
            FederalHoliday::new("Washington's Birthday", Arc::new(NthWeekdayHoliday::new(2, 3, Weekday::Mon)))
                .also_observed_as("Presidents' Day"),
            FederalHoliday::new("Memorial Day", Arc::new(LastWeekdayHoliday::new(5, Weekday::Mon))),
            FederalHoliday::new(JUNETEENTH, Arc::new(FixedDateHoliday::new(6, 19)))
                .from_year(juneteenth_enactment_year),
            FederalHoliday::new("Independence Day", Arc::new(FixedDateHoliday::new(7, 4))),
            FederalHoliday::new("Labor Day", Arc::new(NthWeekdayHoliday::new(9, 1, Weekday::Mon))),
            FederalHoliday::new("Columbus Day", Arc::new(NthWeekdayHoliday::new(10, 2, Weekday::Mon)))
                .also_observed_as("Indigenous Peoples' Day"),
            FederalHoliday::new("Veterans Day", Arc::new(FixedDateHoliday::new(11, 11))),
            FederalHoliday::new("Thanksgiving Day", Arc::new(NthWeekdayHoliday::new(11, 4, Weekday::Thu))),
            FederalHoliday::new("Christmas Day", Arc::new(FixedDateHoliday::new(12, 25))),
        ];
        FederalCalendar { holidays }
    }

    pub fn rules(&self) -> &[FederalHoliday] {
        &self.holidays
    }

    /// Holidays of `year` on their actual dates, in rule order.
    ///
    /// Ten entries before the Juneteenth enactment year, eleven from it on.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter_map(|h| h.actual_holiday(year))
            .collect()
    }

    /// Holidays of `year` on their observed dates under `policy`.
    ///
    /// New Year's Day may come back as December 31 of `year - 1`.
    pub fn observed_holidays_for_year(&self, year: i32, policy: ObservancePolicy) -> Vec<Holiday> {
        apply_shift(self.holidays_for_year(year), policy)
    }
}

impl Default for FederalCalendar {
    fn default() -> Self {
        FederalCalendar::new(JUNETEENTH_ENACTMENT_YEAR)
    }
}
