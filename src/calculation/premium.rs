//! Overtime and night-shift premium calculation.
//!
//! This module computes per-record overtime and night-shift premiums over the
//! records of a period's premium range, priced against the pay-per-hour the
//! metrics aggregator produced for the period's primary range.

use rust_decimal::Decimal;

use crate::config::PremiumRules;
use crate::models::{DateRange, PremiumLine, PremiumResult, WorkRecord};

use super::checked::{Overflows, checked_sum};
use super::night_shift::{night_shift_hours, night_shift_rate};
use super::overtime::{overtime_premium, split_overtime};

/// Calculates overtime and night-shift premiums with the default rules.
///
/// `premium_records` must already be filtered to `premium_range`; the range is
/// carried into the result for display. Per record:
///
/// - `ot_hours = max(hours - 8, 0)`
/// - `ot_premium = ot_hours * pay_per_hour * 1.6`
/// - `ns_hours = 8` if `hours == 12`, else `0`
/// - `ns_premium = ns_hours * (pay_per_hour * 1.3 - base_hourly_rate)`
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::calculate_premiums;
/// use hours_analyzer::models::{DateRange, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
/// let records = vec![WorkRecord::new(day(14), Decimal::from(12), Decimal::from(120))];
///
/// let result = calculate_premiums(
///     &records,
///     DateRange::new(day(11), day(30)),
///     Decimal::from(10),
///     Decimal::from(5),
/// );
///
/// assert_eq!(result.per_record[0].ot_premium, Decimal::from(64));
/// assert_eq!(result.per_record[0].ns_premium, Decimal::from(64));
/// assert_eq!(result.total_premium(), Decimal::from(128));
/// ```
pub fn calculate_premiums(
    premium_records: &[WorkRecord],
    premium_range: DateRange,
    pay_per_hour: Decimal,
    base_hourly_rate: Decimal,
) -> PremiumResult {
    calculate_premiums_with_rules(
        premium_records,
        premium_range,
        pay_per_hour,
        base_hourly_rate,
        &PremiumRules::default(),
    )
}

/// Calculates overtime and night-shift premiums with configured rules.
///
/// The night-shift differential is computed once for the batch and applied to
/// every qualifying record. It is not clamped at zero.
///
/// A rate, premium or total outside the `Decimal` range is reported as zero
/// and listed in `overflowed`, per-record values with their date.
pub fn calculate_premiums_with_rules(
    premium_records: &[WorkRecord],
    premium_range: DateRange,
    pay_per_hour: Decimal,
    base_hourly_rate: Decimal,
    rules: &PremiumRules,
) -> PremiumResult {
    let mut overflows = Overflows::default();
    let ns_premium_rate = overflows.or_zero(
        night_shift_rate(pay_per_hour, rules.night_shift_multiplier, base_hourly_rate),
        "ns_premium_rate",
    );

    let per_record: Vec<PremiumLine> = premium_records
        .iter()
        .map(|record| {
            let ot_hours = split_overtime(record.hours, rules.overtime_threshold_hours).overtime_hours;
            let ns_hours = night_shift_hours(
                record.hours,
                rules.night_shift_qualifying_hours,
                rules.night_shift_block_hours,
            );
            let ot_premium = overflows.or_zero_with(
                overtime_premium(ot_hours, pay_per_hour, rules.overtime_multiplier),
                || format!("ot_premium {}", record.date),
            );
            let ns_premium = overflows.or_zero_with(ns_hours.checked_mul(ns_premium_rate), || {
                format!("ns_premium {}", record.date)
            });

            PremiumLine {
                date: record.date,
                hours: record.hours,
                ot_hours,
                ot_premium,
                ns_hours,
                ns_premium,
            }
        })
        .collect();

    let total_ot_premium = overflows.or_zero(
        checked_sum(per_record.iter().map(|line| line.ot_premium)),
        "total_ot_premium",
    );
    let total_ns_premium = overflows.or_zero(
        checked_sum(per_record.iter().map(|line| line.ns_premium)),
        "total_ns_premium",
    );

    PremiumResult {
        premium_range,
        ns_premium_rate,
        per_record,
        total_ot_premium,
        total_ns_premium,
        overflowed: overflows.into_fields(),
    }
}
