use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::manager::Manager;
use crate::time::calendar::federalcalendar::{FederalCalendar, JUNETEENTH_ENACTMENT_YEAR};
use crate::time::calendar::holidayquery::HolidayQuery;
use crate::time::recurringholiday::weekendadjustment::ObservancePolicy;

pub const FEDERAL_POLICY: &str = "Federal";
pub const FEDERAL_RESERVE_POLICY: &str = "FederalReserve";
pub const ACTUAL_POLICY: &str = "Actual";

fn default_juneteenth_enactment_year() -> i32 {
    JUNETEENTH_ENACTMENT_YEAR
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_juneteenth_enactment_year")]
    juneteenth_enactment_year: i32,
    #[serde(default)]
    observance_policies: Vec<serde_json::Value>
}

fn observance_policy_from_json(json: serde_json::Value) -> Result<ObservancePolicy, ManagerError> {
    parse_json_value(json)
}

/// The holiday calendar together with the named observance policies.
///
/// `Federal`, `FederalReserve` and `Actual` are always registered; a
/// configuration file can add more or redefine them.
pub struct Configuration {
    calendar: Arc<FederalCalendar>,
    observance_policy_manager: Manager<ObservancePolicy>
}

impl Configuration {
    pub fn new() -> Configuration {
        let mut observance_policy_manager = Manager::new(observance_policy_from_json);
        observance_policy_manager.insert(FEDERAL_POLICY.to_owned(), ObservancePolicy::FEDERAL);
        observance_policy_manager.insert(FEDERAL_RESERVE_POLICY.to_owned(), ObservancePolicy::FEDERAL_RESERVE);
        observance_policy_manager.insert(ACTUAL_POLICY.to_owned(), ObservancePolicy::ACTUAL);
        Configuration {
            calendar: Arc::new(FederalCalendar::default()),
            observance_policy_manager
        }
    }

    pub fn calendar(&self) -> &Arc<FederalCalendar> {
        &self.calendar
    }

    pub fn observance_policy_manager(&self) -> &Manager<ObservancePolicy> {
        &self.observance_policy_manager
    }

    pub fn policy(&self, name: &str) -> Result<ObservancePolicy, ManagerError> {
        self.observance_policy_manager.get(name)
    }

    pub fn query(&self, policy: ObservancePolicy) -> HolidayQuery {
        HolidayQuery::new(Arc::clone(&self.calendar), policy)
    }

    pub fn named_query(&self, policy_name: &str) -> Result<HolidayQuery, ManagerError> {
        Ok(self.query(self.policy(policy_name)?))
    }

    pub fn from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        debug!(
            juneteenth_enactment_year = json_prop.juneteenth_enactment_year,
            n_policies = json_prop.observance_policies.len(),
            "loading configuration"
        );
        let policies = self.observance_policy_manager.parse_obj_from_json_vec(&json_prop.observance_policies)?;
        let calendar = FederalCalendar::new(json_prop.juneteenth_enactment_year);

        self.calendar = Arc::new(calendar);
        for (name, policy) in policies {
            debug!(name = name.as_str(), ?policy, "registered observance policy");
            self.observance_policy_manager.insert(name, policy);
        }
        Ok(())
    }

    pub fn from_reader(&mut self, file_path: &Path) -> Result<(), ManagerError> {
        debug!(path = %file_path.display(), "reading configuration file");
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn builtin_policies() {
        let config = Configuration::new();
        assert_eq!(config.policy(FEDERAL_POLICY).unwrap(), ObservancePolicy::FEDERAL);
        assert_eq!(config.policy(FEDERAL_RESERVE_POLICY).unwrap(), ObservancePolicy::FEDERAL_RESERVE);
        assert_eq!(config.policy(ACTUAL_POLICY).unwrap(), ObservancePolicy::ACTUAL);
        assert!(config.policy("Bank").is_err());
    }

    #[test]
    fn json_adds_policies_and_moves_juneteenth() {
        let mut config = Configuration::new();
        config.from_json_value(json!({
            "juneteenth_enactment_year": 2022,
            "observance_policies": [
                {"name": "SundayOnly", "shift_saturday_holidays": false, "shift_sunday_holidays": true}
            ]
        })).unwrap();

        assert_eq!(config.policy("SundayOnly").unwrap(), ObservancePolicy::FEDERAL_RESERVE);
        assert_eq!(config.calendar().holidays_for_year(2021).len(), 10);
        assert_eq!(config.calendar().holidays_for_year(2022).len(), 11);
    }

    #[test]
    fn empty_json_keeps_defaults() {
        let mut config = Configuration::new();
        config.from_json_value(json!({})).unwrap();
        assert_eq!(config.calendar().holidays_for_year(2021).len(), 11);
        assert_eq!(config.observance_policy_manager().names(), vec!["Actual", "Federal", "FederalReserve"]);
    }

    #[test]
    fn policy_without_name_is_rejected() {
        let mut config = Configuration::new();
        let result = config.from_json_value(json!({
            "observance_policies": [{"shift_saturday_holidays": false}]
        }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn failed_load_leaves_configuration_unchanged() {
        let mut config = Configuration::new();
        let result = config.from_json_value(json!({
            "juneteenth_enactment_year": 2030,
            "observance_policies": [
                {"name": "Good", "shift_saturday_holidays": false},
                {"shift_sunday_holidays": false}
            ]
        }));

        assert!(result.is_err());
        assert_eq!(config.calendar().holidays_for_year(2025).len(), 11);
        assert!(!config.observance_policy_manager().contains("Good"));
        assert_eq!(config.observance_policy_manager().names(), vec!["Actual", "Federal", "FederalReserve"]);
    }

    #[test]
    fn named_query_uses_policy() {
        let config = Configuration::new();
        let query = config.named_query(FEDERAL_RESERVE_POLICY).unwrap();
        assert!(query.is_holiday(NaiveDate::from_ymd_opt(2015, 7, 4).unwrap()));
        assert!(!query.is_holiday(NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()));
    }

    #[test]
    fn from_reader_loads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fedholidays.json");
        std::fs::write(&path, r#"{
            "juneteenth_enactment_year": 2024,
            "observance_policies": [
                {"name": "Bank", "shift_saturday_holidays": false, "shift_sunday_holidays": false}
            ]
        }"#).expect("write config");

        let mut config = Configuration::new();
        config.from_reader(&path).unwrap();

        assert_eq!(config.policy("Bank").unwrap(), ObservancePolicy::ACTUAL);
        assert_eq!(config.calendar().holidays_for_year(2023).len(), 10);
        assert_eq!(config.calendar().holidays_for_year(2024).len(), 11);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").expect("write config");

        let mut config = Configuration::new();
        let result = config.from_reader(&path);
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut config = Configuration::new();
        let result = config.from_reader(Path::new("/nonexistent/fedholidays.json"));
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
