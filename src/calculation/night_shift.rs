//! Night-shift differential.
//!
//! A day recorded as exactly the qualifying hours (12) is credited with a flat
//! night-shift block (8 hours). Each block hour earns the gap between a loaded
//! rate (`pay_per_hour * 1.3`) and the caller's base hourly rate. The gap is
//! not clamped and may be negative.

use rust_decimal::Decimal;

/// Hours a day must record, exactly, to earn the night-shift block.
pub const DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Night-shift hours credited to a qualifying day.
pub const DEFAULT_NIGHT_SHIFT_BLOCK_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Loading applied to pay-per-hour before the base rate is subtracted (1.3).
pub const DEFAULT_NIGHT_SHIFT_MULTIPLIER: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Night-shift hours credited for a day.
///
/// Exact match only: 11.5 or 12.5 hours earn nothing.
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::{
///     night_shift_hours, DEFAULT_NIGHT_SHIFT_BLOCK_HOURS, DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let block = night_shift_hours(
///     Decimal::from_str("12.00").unwrap(),
///     DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS,
///     DEFAULT_NIGHT_SHIFT_BLOCK_HOURS,
/// );
/// assert_eq!(block, Decimal::from(8));
/// ```
pub fn night_shift_hours(hours: Decimal, qualifying_hours: Decimal, block_hours: Decimal) -> Decimal {
    if hours == qualifying_hours {
        block_hours
    } else {
        Decimal::ZERO
    }
}

/// The per-hour night-shift differential: `pay_per_hour * multiplier - base_hourly_rate`.
///
/// Returns `None` if the result leaves the `Decimal` range.
pub fn night_shift_rate(
    pay_per_hour: Decimal,
    multiplier: Decimal,
    base_hourly_rate: Decimal,
) -> Option<Decimal> {
    pay_per_hour.checked_mul(multiplier)?.checked_sub(base_hourly_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn block_for(hours: &str) -> Decimal {
        night_shift_hours(
            dec(hours),
            DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS,
            DEFAULT_NIGHT_SHIFT_BLOCK_HOURS,
        )
    }

    #[test]
    fn test_exactly_12_hours_earns_block() {
        assert_eq!(block_for("12"), dec("8"));
    }

    #[test]
    fn test_trailing_zero_scale_still_matches() {
        assert_eq!(block_for("12.000"), dec("8"));
    }

    #[test]
    fn test_near_12_hours_earns_nothing() {
        assert_eq!(block_for("11.5"), Decimal::ZERO);
        assert_eq!(block_for("12.5"), Decimal::ZERO);
        assert_eq!(block_for("11.99"), Decimal::ZERO);
    }

    #[test]
    fn test_other_lengths_earn_nothing() {
        assert_eq!(block_for("0"), Decimal::ZERO);
        assert_eq!(block_for("8"), Decimal::ZERO);
        assert_eq!(block_for("16"), Decimal::ZERO);
    }

    #[test]
    fn test_rate_is_loaded_pay_minus_base() {
        assert_eq!(
            night_shift_rate(dec("10"), DEFAULT_NIGHT_SHIFT_MULTIPLIER, dec("5")),
            Some(dec("8"))
        );
    }

    #[test]
    fn test_rate_may_be_negative() {
        assert_eq!(
            night_shift_rate(dec("10"), DEFAULT_NIGHT_SHIFT_MULTIPLIER, dec("20")),
            Some(dec("-7"))
        );
    }

    #[test]
    fn test_rate_with_zero_pay_per_hour_is_minus_base() {
        assert_eq!(
            night_shift_rate(Decimal::ZERO, DEFAULT_NIGHT_SHIFT_MULTIPLIER, dec("9.5")),
            Some(dec("-9.5"))
        );
    }

    #[test]
    fn test_rate_out_of_range_is_none() {
        assert_eq!(
            night_shift_rate(Decimal::MAX, DEFAULT_NIGHT_SHIFT_MULTIPLIER, Decimal::ZERO),
            None
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS, dec("12"));
        assert_eq!(DEFAULT_NIGHT_SHIFT_BLOCK_HOURS, dec("8"));
        assert_eq!(DEFAULT_NIGHT_SHIFT_MULTIPLIER, dec("1.3"));
    }
}
