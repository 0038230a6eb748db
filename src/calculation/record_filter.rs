//! Date-range record selection.

use crate::models::{DateRange, WorkRecord};

/// Returns the records whose date falls inside `range`, in input order.
///
/// Both bounds are inclusive. An inverted range returns nothing. Records carry
/// day-granular dates; any time component was dropped at ingestion.
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::filter_records;
/// use hours_analyzer::models::{DateRange, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
/// let records = vec![
///     WorkRecord::new(day(12), Decimal::from(8), Decimal::from(100)),
///     WorkRecord::new(day(9), Decimal::from(12), Decimal::from(150)),
///     WorkRecord::new(day(10), Decimal::from(8), Decimal::from(100)),
/// ];
///
/// let selected = filter_records(&records, DateRange::new(day(1), day(10)));
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0].date, day(9));
/// assert_eq!(selected[1].date, day(10));
/// ```
pub fn filter_records(records: &[WorkRecord], range: DateRange) -> Vec<WorkRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.date))
        .cloned()
        .collect()
}
