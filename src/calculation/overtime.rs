//! Daily overtime detection.
//!
//! This module splits a day's hours into standard hours (up to the daily
//! threshold) and overtime hours (everything above it). The length of the day
//! does not matter: a 12 hour shift and a 9.5 hour day are treated the same.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours in a standard day; anything above counts as overtime.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Overtime premium multiplier applied to the period's pay-per-hour (1.6).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(16, 0, 0, false, 1);

/// A day's hours split at the overtime threshold.
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::{split_overtime, DEFAULT_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_overtime(Decimal::from_str("10.5").unwrap(), DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.standard_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("2.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub standard_hours: Decimal,
    /// Hours above the threshold, never negative.
    pub overtime_hours: Decimal,
}

/// Splits `hours` into standard and overtime portions.
///
/// `overtime_hours = max(hours - threshold, 0)`, saturating at `Decimal::MAX`
/// when the threshold is configured negative.
pub fn split_overtime(hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if hours > threshold {
        OvertimeSplit {
            standard_hours: threshold,
            overtime_hours: hours.saturating_sub(threshold),
        }
    } else {
        OvertimeSplit {
            standard_hours: hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

/// Overtime premium for a day: `overtime_hours * pay_per_hour * multiplier`.
///
/// Returns `None` if the product leaves the `Decimal` range.
pub fn overtime_premium(
    overtime_hours: Decimal,
    pay_per_hour: Decimal,
    multiplier: Decimal,
) -> Option<Decimal> {
    overtime_hours.checked_mul(pay_per_hour)?.checked_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exactly_8_hours_no_overtime() {
        let split = split_overtime(dec("8"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.standard_hours, dec("8"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_12_hours_4_hours_overtime() {
        let split = split_overtime(dec("12"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.standard_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("4"));
    }

    #[test]
    fn test_11_25_hours_3_25_hours_overtime() {
        let split = split_overtime(dec("11.25"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.overtime_hours, dec("3.25"));
    }

    #[test]
    fn test_short_day_no_overtime() {
        let split = split_overtime(dec("6"), DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.standard_hours, dec("6"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_zero_hours() {
        let split = split_overtime(Decimal::ZERO, DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(split.standard_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_overtime(dec("12"), dec("10"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    #[test]
    fn test_overtime_premium() {
        assert_eq!(
            overtime_premium(dec("4"), dec("10"), DEFAULT_OVERTIME_MULTIPLIER),
            Some(dec("64"))
        );
        assert_eq!(
            overtime_premium(dec("0.5"), dec("12.5"), DEFAULT_OVERTIME_MULTIPLIER),
            Some(dec("10"))
        );
    }

    #[test]
    fn test_overtime_premium_zero_rate() {
        assert_eq!(
            overtime_premium(dec("4"), Decimal::ZERO, DEFAULT_OVERTIME_MULTIPLIER),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_overtime_premium_out_of_range_is_none() {
        assert_eq!(
            overtime_premium(dec("99999999992"), dec("100000000000000000000"), DEFAULT_OVERTIME_MULTIPLIER),
            None
        );
    }

    #[test]
    fn test_negative_threshold_saturates() {
        let split = split_overtime(Decimal::MAX, dec("-8"));
        assert_eq!(split.overtime_hours, Decimal::MAX);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_OVERTIME_THRESHOLD, dec("8"));
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.6"));
    }
}
