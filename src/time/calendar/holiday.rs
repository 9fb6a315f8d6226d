use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{
    Serialize,
    Deserialize
};

/// One holiday on one date.
///
/// `date_string` is always derived from `date` as `YYYY-M-D` without zero
/// padding, so two holidays on the same day compare equal as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    also_observed_as: Option<String>,
    date: NaiveDate,
    date_string: String
}

pub fn date_string(d: NaiveDate) -> String {
    format!("{}-{}-{}", d.year(), d.month(), d.day())
}

impl Holiday {
    pub fn new(name: impl Into<String>, also_observed_as: Option<String>, date: NaiveDate) -> Holiday {
        Holiday {
            name: name.into(),
            also_observed_as,
            date,
            date_string: date_string(date)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn also_observed_as(&self) -> Option<&str> {
        self.also_observed_as.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    /// Same holiday moved to `date`, with the date string re-derived.
    pub fn with_date(&self, date: NaiveDate) -> Holiday {
        Holiday {
            name: self.name.clone(),
            also_observed_as: self.also_observed_as.clone(),
            date,
            date_string: date_string(date)
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.also_observed_as {
            Some(alias) => write!(f, "{}\t{} ({})", self.date_string, self.name, alias),
            None => write!(f, "{}\t{}", self.date_string, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn date_string_has_no_padding() {
        let h = Holiday::new("Independence Day", None, NaiveDate::from_ymd_opt(2015, 7, 3).unwrap());
        assert_eq!(h.date_string(), "2015-7-3");
    }

    #[test]
    fn with_date_rederives_string() {
        let h = Holiday::new("Christmas Day", None, NaiveDate::from_ymd_opt(2016, 12, 25).unwrap());
        let moved = h.with_date(NaiveDate::from_ymd_opt(2016, 12, 26).unwrap());
        assert_eq!(moved.name(), "Christmas Day");
        assert_eq!(moved.date_string(), "2016-12-26");
    }

    #[test]
    fn serializes_camel_case() {
        let h = Holiday::new(
            "Columbus Day",
            Some("Indigenous Peoples' Day".to_owned()),
            NaiveDate::from_ymd_opt(2014, 10, 13).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&h).unwrap(),
            json!({
                "name": "Columbus Day",
                "alsoObservedAs": "Indigenous Peoples' Day",
                "date": "2014-10-13",
                "dateString": "2014-10-13"
            })
        );
    }

    #[test]
    fn omits_missing_alias() {
        let h = Holiday::new("Labor Day", None, NaiveDate::from_ymd_opt(2014, 9, 1).unwrap());
        let value = serde_json::to_value(&h).unwrap();
        assert!(value.get("alsoObservedAs").is_none());
        let back: Holiday = serde_json::from_value(value).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn display_includes_alias() {
        let h = Holiday::new(
            "Washington's Birthday",
            Some("Presidents' Day".to_owned()),
            NaiveDate::from_ymd_opt(2014, 2, 17).unwrap()
        );
        assert_eq!(h.to_string(), "2014-2-17\tWashington's Birthday (Presidents' Day)");
    }
}
