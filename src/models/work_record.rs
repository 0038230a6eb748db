//! Daily work record and date range models.
//!
//! This module contains the [`WorkRecord`] type holding one day's hours and
//! reference pay, the inclusive [`DateRange`] used to select records, and the
//! [`EditDraft`] carrying unsaved edits for a period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's worked hours and reference pay.
///
/// `pay` is the figure used for averaging (the `payforaverage` column of the
/// record table), not necessarily the wage actually paid for that day.
/// Duplicate dates are legal and are summed like any other record.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = WorkRecord::new(
///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     Decimal::new(12, 0),
///     Decimal::new(15000, 2),
/// );
/// assert!(record.is_working_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The calendar day the record belongs to.
    pub date: NaiveDate,
    /// Hours worked on that day.
    #[serde(default)]
    pub hours: Decimal,
    /// Reference pay for that day.
    #[serde(default, alias = "payforaverage")]
    pub pay: Decimal,
}

impl WorkRecord {
    /// Creates a record for the given day.
    pub fn new(date: NaiveDate, hours: Decimal, pay: Decimal) -> Self {
        Self { date, hours, pay }
    }

    /// A working day is any record with more than zero hours.
    pub fn is_working_day(&self) -> bool {
        self.hours > Decimal::ZERO
    }
}

/// Reads a record date from `YYYY-MM-DD` (or `YYYY/MM/DD`) text.
///
/// A trailing time part such as `00:00:00` or `T18:30:00` is dropped; records
/// are day-granular. Returns `None` for blank or unreadable text.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::parse_record_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// assert_eq!(parse_record_date("2025-03-04"), Some(day));
/// assert_eq!(parse_record_date("2025-03-04 18:30:00"), Some(day));
/// assert_eq!(parse_record_date("yesterday"), None);
/// ```
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let day = value.trim().split([' ', 'T']).next()?;
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
}

/// An inclusive date window.
///
/// Both bounds are inclusive. A range whose `start` falls after its `end` is
/// legal and simply matches no date; the configured schedule contains such
/// ranges and they are kept exactly as written.
///
/// # Example
///
/// ```
/// use hours_analyzer::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 9).unwrap(),
/// );
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())); // start date
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 4, 9).unwrap())); // end date
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from its two inclusive bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks if a given date falls within this range.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` if `start <= date <= end`, `false` otherwise.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns `true` when no date can fall inside the range.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Edits to one period's records that have not been saved yet.
///
/// The draft is owned by the caller and passed explicitly into computation
/// and into the save path. Discarding it is the same as reloading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    /// The period whose primary range the draft replaces.
    pub period_id: u32,
    /// The edited records, in grid order.
    pub records: Vec<WorkRecord>,
}

impl EditDraft {
    /// Creates a draft for a period.
    pub fn new(period_id: u32, records: Vec<WorkRecord>) -> Self {
        Self { period_id, records }
    }
}
