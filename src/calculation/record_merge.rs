//! Upsert-by-range merge of edited records.

use crate::models::{DateRange, WorkRecord};

/// Replaces every record inside `range` with `replacement`.
///
/// Records of `existing` outside the range keep their order and come first;
/// all of `replacement` follows, in its own order. Replacement dates are not
/// checked against the range: an edit that moves a day outside the range is
/// kept. `existing` is left untouched so the caller can still compare with or
/// roll back to it.
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::merge_records;
/// use hours_analyzer::models::{DateRange, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
/// let existing = vec![
///     WorkRecord::new(day(1, 5), Decimal::from(8), Decimal::from(100)),
///     WorkRecord::new(day(2, 5), Decimal::from(8), Decimal::from(100)),
/// ];
/// let replacement = vec![WorkRecord::new(day(2, 6), Decimal::from(12), Decimal::from(150))];
///
/// let merged = merge_records(&existing, DateRange::new(day(2, 1), day(2, 28)), &replacement);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].date, day(1, 5));
/// assert_eq!(merged[1].date, day(2, 6));
/// assert_eq!(existing.len(), 2);
/// ```
pub fn merge_records(
    existing: &[WorkRecord],
    range: DateRange,
    replacement: &[WorkRecord],
) -> Vec<WorkRecord> {
    existing
        .iter()
        .filter(|record| !range.contains(record.date))
        .chain(replacement.iter())
        .cloned()
        .collect()
}
