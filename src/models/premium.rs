//! Overtime and night-shift premium models.
//!
//! This module contains [`PremiumLine`], the per-day breakdown, and
//! [`PremiumResult`], the totals over a period's premium range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Premiums attributed to a single work record.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::PremiumLine;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // A 12 hour day at a pay-per-hour of 10 and a base rate of 5
/// let line = PremiumLine {
///     date: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
///     hours: Decimal::new(12, 0),
///     ot_hours: Decimal::new(4, 0),
///     ot_premium: Decimal::new(64, 0),
///     ns_hours: Decimal::new(8, 0),
///     ns_premium: Decimal::new(64, 0),
/// };
/// assert_eq!(line.total_premium(), Decimal::new(128, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumLine {
    /// The day of the record.
    pub date: NaiveDate,
    /// Hours recorded for the day.
    pub hours: Decimal,
    /// Hours above the standard day.
    pub ot_hours: Decimal,
    /// Overtime premium for the day.
    pub ot_premium: Decimal,
    /// Night-shift hours credited for the day.
    pub ns_hours: Decimal,
    /// Night-shift premium for the day. May be negative.
    pub ns_premium: Decimal,
}

impl PremiumLine {
    /// Overtime plus night-shift premium for the day, saturating at the
    /// `Decimal` bounds.
    pub fn total_premium(&self) -> Decimal {
        self.ot_premium.saturating_add(self.ns_premium)
    }
}

/// Overtime and night-shift premiums over a premium range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumResult {
    /// The window the premium records were selected from.
    pub premium_range: DateRange,
    /// The differential applied per night-shift hour in this batch.
    pub ns_premium_rate: Decimal,
    /// One line per premium record, in input order.
    pub per_record: Vec<PremiumLine>,
    /// Sum of `ot_premium` over `per_record`.
    pub total_ot_premium: Decimal,
    /// Sum of `ns_premium` over `per_record`.
    pub total_ns_premium: Decimal,
    /// Values that overflowed and are reported as zero.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overflowed: Vec<String>,
}

impl PremiumResult {
    /// Overtime plus night-shift premium over the whole range, saturating at
    /// the `Decimal` bounds.
    pub fn total_premium(&self) -> Decimal {
        self.total_ot_premium.saturating_add(self.total_ns_premium)
    }
}
