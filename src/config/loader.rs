//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the period
//! schedule and premium rules from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::calendar::PeriodCalendar;
use super::types::{PremiumRules, ScheduleConfig};

/// Loads and provides access to deployment configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// holds the resulting [`PeriodCalendar`] and [`PremiumRules`] for the life
/// of the process.
///
/// # Directory Structure
///
/// ```text
/// config/pay-months-2025/
/// ├── schedule.yaml   # The twelve periods and their date ranges
/// └── premiums.yaml   # Overtime and night-shift rules (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_analyzer::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pay-months-2025").unwrap();
/// let range = loader.calendar().range_for(5).unwrap();
/// println!("{}: {} to {}", loader.schedule_name(), range.start, range.end);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule_name: String,
    calendar: PeriodCalendar,
    premium_rules: PremiumRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/pay-months-2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `schedule.yaml` is missing or contains invalid YAML
    /// - the schedule does not define periods 1-12 exactly once
    /// - `premiums.yaml` exists but contains invalid YAML
    ///
    /// A missing `premiums.yaml` falls back to [`PremiumRules::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load schedule.yaml
        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        let calendar = PeriodCalendar::from_schedule(&schedule)?;

        // Load premiums.yaml if present
        let premiums_path = path.join("premiums.yaml");
        let premium_rules = if premiums_path.exists() {
            Self::load_yaml::<PremiumRules>(&premiums_path)?
        } else {
            debug!(path = %premiums_path.display(), "No premiums.yaml, using default rules");
            PremiumRules::default()
        };

        Ok(Self {
            schedule_name: schedule.name,
            calendar,
            premium_rules,
        })
    }

    /// Configuration backed by the built-in 2025 schedule and default rules.
    pub fn builtin() -> Self {
        Self {
            schedule_name: "Built-in 2025 schedule".to_string(),
            calendar: PeriodCalendar::builtin(),
            premium_rules: PremiumRules::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the schedule name.
    pub fn schedule_name(&self) -> &str {
        &self.schedule_name
    }

    /// Returns the period calendar.
    pub fn calendar(&self) -> &PeriodCalendar {
        &self.calendar
    }

    /// Returns the premium rules.
    pub fn premium_rules(&self) -> &PremiumRules {
        &self.premium_rules
    }

    /// Picks the base hourly rate for a computation.
    ///
    /// A caller-supplied rate always wins; otherwise the configured default is used.
    pub fn base_hourly_rate(&self, requested: Option<Decimal>) -> Decimal {
        requested.unwrap_or(self.premium_rules.default_base_hourly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/pay-months-2025"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.schedule_name(), "Pay months 2025");
        assert_eq!(loader.calendar().periods().len(), 12);
    }

    #[test]
    fn test_shipped_schedule_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.calendar(), &PeriodCalendar::builtin());
    }

    #[test]
    fn test_premium_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.premium_rules();
        assert_eq!(rules.overtime_threshold_hours, dec("8"));
        assert_eq!(rules.overtime_multiplier, dec("1.6"));
        assert_eq!(rules.night_shift_qualifying_hours, dec("12"));
        assert_eq!(rules.night_shift_block_hours, dec("8"));
        assert_eq!(rules.night_shift_multiplier, dec("1.3"));
    }

    #[test]
    fn test_base_hourly_rate_prefers_request() {
        let loader = ConfigLoader::builtin();
        assert_eq!(loader.base_hourly_rate(Some(dec("11.5"))), dec("11.5"));
        assert_eq!(loader.base_hourly_rate(None), Decimal::ZERO);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_premiums_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let schedule = fs::read_to_string(Path::new(config_path()).join("schedule.yaml")).unwrap();
        fs::write(dir.path().join("schedule.yaml"), schedule).unwrap();

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.premium_rules(), &PremiumRules::default());
    }

    #[test]
    fn test_malformed_schedule_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schedule.yaml"), "name: [unclosed").unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("schedule.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_schedule_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r#"
name: Short
year: 2025
periods:
  - id: 1
    label: January
    start_date: 2025-01-01
    end_date: 2025-01-31
"#;
        fs::write(dir.path().join("schedule.yaml"), yaml).unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::InvalidSchedule { message }) => {
                assert_eq!(message, "period 2 is missing");
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_premium_range_loaded_for_period_7() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(
            loader.calendar().premium_range_for(7).unwrap(),
            Some(DateRange::new(
                NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 9).unwrap(),
            ))
        );
    }
}
