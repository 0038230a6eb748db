//! Period definition model.
//!
//! This module contains the [`PeriodDefinition`] type describing one of the
//! twelve configured pay-reporting windows.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// First valid period identifier.
pub const FIRST_PERIOD: u32 = 1;

/// Last valid period identifier.
pub const LAST_PERIOD: u32 = 12;

/// One of the twelve pay-reporting windows.
///
/// Periods are not calendar months. The primary range selects the records
/// summarised for the period; the optional premium range selects the records
/// that overtime and night-shift premiums are computed over. The premium range
/// is independent of the primary range and may sit partly or wholly inside
/// the following period.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::{DateRange, PeriodDefinition};
/// use chrono::NaiveDate;
///
/// let period = PeriodDefinition {
///     id: 5,
///     label: "May (Jan 11 - Apr 9)".to_string(),
///     primary_range: DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 4, 9).unwrap(),
///     ),
///     premium_range: Some(DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 4, 11).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
///     )),
/// };
///
/// assert!(period.has_premium_range());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDefinition {
    /// Period identifier, 1 through 12.
    pub id: u32,
    /// Human-readable label.
    pub label: String,
    /// Window of records summarised for this period (inclusive).
    pub primary_range: DateRange,
    /// Window of records premiums are computed over, if any (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_range: Option<DateRange>,
}

impl PeriodDefinition {
    /// Returns `true` if premiums are computed for this period.
    pub fn has_premium_range(&self) -> bool {
        self.premium_range.is_some()
    }
}

/// Returns `true` if `period_id` names one of the twelve periods.
pub fn is_valid_period_id(period_id: u32) -> bool {
    (FIRST_PERIOD..=LAST_PERIOD).contains(&period_id)
}
