//! Period metrics model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals and averages derived from a filtered set of work records.
///
/// Every ratio whose denominator is zero is reported as zero, so an empty or
/// sparse period yields a well-formed all-zero result. A value that does not
/// fit in a `Decimal` is also reported as zero and named in `overflowed`.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::MetricsResult;
/// use rust_decimal::Decimal;
///
/// let empty = MetricsResult::default();
/// assert_eq!(empty.total_hours, Decimal::ZERO);
/// assert_eq!(empty.working_days, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Sum of hours over all records.
    pub total_hours: Decimal,
    /// Sum of reference pay over all records.
    pub total_pay: Decimal,
    /// Number of records with more than zero hours.
    pub working_days: u32,
    /// `total_hours / working_days`, or zero.
    pub avg_hours_per_day: Decimal,
    /// `total_pay / working_days`, or zero.
    pub avg_pay_per_day: Decimal,
    /// `total_pay / total_hours`, or zero.
    pub pay_per_hour: Decimal,
    /// Fields whose value overflowed and is reported as zero.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overflowed: Vec<String>,
}
