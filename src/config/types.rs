//! Configuration types for the period schedule and premium rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_NIGHT_SHIFT_BLOCK_HOURS, DEFAULT_NIGHT_SHIFT_MULTIPLIER,
    DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS, DEFAULT_OVERTIME_MULTIPLIER,
    DEFAULT_OVERTIME_THRESHOLD,
};

/// A single period as written in `schedule.yaml`.
///
/// The premium bounds must be given together or not at all.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodEntry {
    /// Period identifier, 1 through 12.
    pub id: u32,
    /// Human-readable label.
    pub label: String,
    /// First day of the primary range.
    pub start_date: NaiveDate,
    /// Last day of the primary range.
    pub end_date: NaiveDate,
    /// First day of the premium range.
    #[serde(default)]
    pub premium_start_date: Option<NaiveDate>,
    /// Last day of the premium range.
    #[serde(default)]
    pub premium_end_date: Option<NaiveDate>,
}

/// Schedule configuration file structure (`schedule.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Name of the schedule (e.g., "Pay months 2025").
    pub name: String,
    /// The year the schedule was written for.
    pub year: i32,
    /// The twelve period entries.
    pub periods: Vec<PeriodEntry>,
}

/// Premium rules (`premiums.yaml`).
///
/// Every field falls back to its default when omitted, so an empty file
/// yields [`PremiumRules::default`].
///
/// # Example
///
/// ```
/// use hours_analyzer::config::PremiumRules;
/// use rust_decimal::Decimal;
///
/// let rules = PremiumRules::default();
/// assert_eq!(rules.overtime_threshold_hours, Decimal::new(8, 0));
/// assert_eq!(rules.overtime_multiplier, Decimal::new(16, 1));
/// assert_eq!(rules.night_shift_multiplier, Decimal::new(13, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumRules {
    /// Hours in a standard day; anything above is overtime.
    pub overtime_threshold_hours: Decimal,
    /// Multiplier on pay-per-hour for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Exact hours a day must record to earn the night-shift block.
    pub night_shift_qualifying_hours: Decimal,
    /// Night-shift hours credited to a qualifying day.
    pub night_shift_block_hours: Decimal,
    /// Multiplier on pay-per-hour before the base rate is subtracted.
    pub night_shift_multiplier: Decimal,
    /// Base hourly rate used when a caller does not supply one.
    pub default_base_hourly_rate: Decimal,
}

impl Default for PremiumRules {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            night_shift_qualifying_hours: DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS,
            night_shift_block_hours: DEFAULT_NIGHT_SHIFT_BLOCK_HOURS,
            night_shift_multiplier: DEFAULT_NIGHT_SHIFT_MULTIPLIER,
            default_base_hourly_rate: Decimal::ZERO,
        }
    }
}
