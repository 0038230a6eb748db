//! Period metrics aggregation.
//!
//! Totals, working-day count and the three derived ratios over a set of
//! records. A ratio with a zero denominator is zero: premium computation
//! downstream relies on a pay-per-hour of zero rather than an error.

use rust_decimal::Decimal;

use crate::models::{MetricsResult, WorkRecord};

use super::checked::{Overflows, checked_sum};

/// Aggregates a filtered record set into a [`MetricsResult`].
///
/// - `total_hours` and `total_pay` are plain sums (duplicate dates included).
/// - `working_days` counts records with `hours > 0`.
/// - `avg_hours_per_day` and `avg_pay_per_day` divide by `working_days`.
/// - `pay_per_hour` divides `total_pay` by `total_hours`.
///
/// A sum or ratio outside the `Decimal` range is reported as zero and listed
/// in `overflowed`. A ratio over an overflowed total is zero as well.
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::aggregate;
/// use hours_analyzer::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let metrics = aggregate(&[
///     WorkRecord::new(day(3), Decimal::from(8), Decimal::from(100)),
///     WorkRecord::new(day(4), Decimal::ZERO, Decimal::ZERO),
/// ]);
///
/// assert_eq!(metrics.working_days, 1);
/// assert_eq!(metrics.pay_per_hour, Decimal::new(125, 1));
/// ```
pub fn aggregate(records: &[WorkRecord]) -> MetricsResult {
    let mut overflows = Overflows::default();
    let total_hours = overflows.or_zero(checked_sum(records.iter().map(|r| r.hours)), "total_hours");
    let total_pay = overflows.or_zero(checked_sum(records.iter().map(|r| r.pay)), "total_pay");
    let working_days = records.iter().filter(|r| r.is_working_day()).count() as u32;

    let days = Decimal::from(working_days);
    let avg_hours_per_day = overflows.or_zero(ratio_or_zero(total_hours, days), "avg_hours_per_day");
    let avg_pay_per_day = overflows.or_zero(ratio_or_zero(total_pay, days), "avg_pay_per_day");
    let pay_per_hour = overflows.or_zero(ratio_or_zero(total_pay, total_hours), "pay_per_hour");

    MetricsResult {
        total_hours,
        total_pay,
        working_days,
        avg_hours_per_day,
        avg_pay_per_day,
        pay_per_hour,
        overflowed: overflows.into_fields(),
    }
}

/// `numerator / denominator` when the denominator is positive, zero otherwise.
/// `None` when the quotient overflows.
fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator)
    } else {
        Some(Decimal::ZERO)
    }
}
