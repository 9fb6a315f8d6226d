use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendar::holiday::Holiday;

const ONE_DAY: Days = Days::new(1);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Which weekend holidays move to an adjacent weekday for observance.
///
/// A Saturday holiday is observed on the preceding Friday, a Sunday holiday
/// on the following Monday. Either move can be switched off, in which case
/// the weekend date itself is the holiday date.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservancePolicy {
    pub shift_saturday_holidays: bool,
    pub shift_sunday_holidays: bool
}

impl ObservancePolicy {
    /// US federal observance: both weekend days shift.
    pub const FEDERAL: ObservancePolicy = ObservancePolicy::new(true, true);

    /// Federal Reserve observance: Saturday holidays are not moved to Friday.
    pub const FEDERAL_RESERVE: ObservancePolicy = ObservancePolicy::new(false, true);

    /// Actual dates, no weekend shift at all.
    pub const ACTUAL: ObservancePolicy = ObservancePolicy::new(false, false);

    pub const fn new(shift_saturday_holidays: bool, shift_sunday_holidays: bool) -> ObservancePolicy {
        ObservancePolicy { shift_saturday_holidays, shift_sunday_holidays }
    }

    pub fn adjustment(&self, weekday: Weekday) -> WeekendAdjustment {
        match weekday {
            Weekday::Sat if self.shift_saturday_holidays => WeekendAdjustment::PreviousWeekday,
            Weekday::Sun if self.shift_sunday_holidays => WeekendAdjustment::NextWeekday,
            _ => WeekendAdjustment::Unadjusted
        }
    }

    /// Observed date for a holiday whose actual date is `d`.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let adjusted = match self.adjustment(d.weekday()) {
            WeekendAdjustment::Unadjusted => Some(d),
            WeekendAdjustment::NextWeekday => d.checked_add_days(ONE_DAY),
            WeekendAdjustment::PreviousWeekday => d.checked_sub_days(ONE_DAY)
        };
        adjusted.unwrap_or(d)
    }
}

impl Default for ObservancePolicy {
    fn default() -> Self {
        ObservancePolicy::FEDERAL
    }
}

/// Moves every holiday to its observed date under `policy`, keeping order.
pub fn apply_shift(holidays: Vec<Holiday>, policy: ObservancePolicy) -> Vec<Holiday> {
    holidays
        .into_iter()
        .map(|h| {
            let observed = policy.adjust(h.date());
            if observed == h.date() {
                h
            } else {
                h.with_date(observed)
            }
        })
        .collect()
}
