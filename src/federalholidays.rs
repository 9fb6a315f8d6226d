//! Entry points for US federal holiday lookups.
//!
//! Every function computes its answer from scratch; anything that needs
//! "now" takes a [`Clock`].

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendar::federalcalendar::FederalCalendar;
use crate::time::calendar::holiday::Holiday;
use crate::time::calendar::holidayquery::HolidayQuery;
use crate::time::clock::Clock;
use crate::time::recurringholiday::weekendadjustment::ObservancePolicy;
use crate::time::utility::one_year_after;

/// Which calendar fields of an instant identify the day being asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFields {
    #[default]
    Local,
    Utc
}

impl DateFields {
    pub fn calendar_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> NaiveDate {
        match self {
            DateFields::Local => date.with_timezone(&chrono::Local).date_naive(),
            DateFields::Utc => date.with_timezone(&chrono::Utc).date_naive()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidayOptions {
    pub policy: ObservancePolicy,
    pub fields: DateFields
}

impl HolidayOptions {
    pub fn new(policy: ObservancePolicy, fields: DateFields) -> HolidayOptions {
        HolidayOptions { policy, fields }
    }

    pub fn utc(policy: ObservancePolicy) -> HolidayOptions {
        HolidayOptions::new(policy, DateFields::Utc)
    }
}

fn federal_query(policy: ObservancePolicy) -> HolidayQuery {
    HolidayQuery::new(Arc::new(FederalCalendar::default()), policy)
}

/// Observed federal holidays of `year`.
pub fn all_for_year(year: i32, policy: ObservancePolicy) -> Vec<Holiday> {
    federal_query(policy).observed_holidays_for_year(year)
}

pub fn all_for_current_year(clock: &dyn Clock, policy: ObservancePolicy) -> Vec<Holiday> {
    all_for_year(clock.today().year(), policy)
}

/// Whether the day `date` falls on, read in the frame `options.fields`
/// selects, is an observed federal holiday.
pub fn is_a_holiday<Tz: TimeZone>(date: &DateTime<Tz>, options: HolidayOptions) -> bool {
    is_a_holiday_on(options.fields.calendar_date(date), options.policy)
}

pub fn is_a_holiday_on(date: NaiveDate, policy: ObservancePolicy) -> bool {
    federal_query(policy).is_holiday(date)
}

pub fn is_today_a_holiday(clock: &dyn Clock, options: HolidayOptions) -> bool {
    is_a_holiday(&clock.now(), options)
}

/// Observed holidays in `[start, end]`; `end` defaults to one year after `start`.
pub fn in_range(start: NaiveDate, end: Option<NaiveDate>, policy: ObservancePolicy) -> Vec<Holiday> {
    let end = end.unwrap_or_else(|| one_year_after(start));
    federal_query(policy).holidays_in_range(start, end)
}

/// Observed holidays from today through the same day next year.
pub fn upcoming(clock: &dyn Clock, policy: ObservancePolicy) -> Vec<Holiday> {
    in_range(clock.today(), None, policy)
}
