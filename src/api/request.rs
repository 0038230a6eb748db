//! Request types for the hours analyzer API.
//!
//! Record dates arrive as text and are read leniently: a record whose date
//! cannot be read is dropped before any computation, the same way an
//! unreadable row is left out when the record file is loaded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{WorkRecord, parse_record_date};

/// A work record as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The day, as `YYYY-MM-DD` (a time part is ignored).
    pub date: String,
    /// Hours worked; missing means zero.
    #[serde(default)]
    pub hours: Decimal,
    /// Reference pay; missing means zero.
    #[serde(default, alias = "payforaverage")]
    pub pay: Decimal,
}

impl RecordRequest {
    /// Converts to a [`WorkRecord`], or `None` if the date cannot be read.
    pub fn into_record(self) -> Option<WorkRecord> {
        parse_record_date(&self.date).map(|date| WorkRecord::new(date, self.hours, self.pay))
    }
}

impl From<&WorkRecord> for RecordRequest {
    fn from(record: &WorkRecord) -> Self {
        RecordRequest {
            date: record.date.format("%Y-%m-%d").to_string(),
            hours: record.hours,
            pay: record.pay,
        }
    }
}

/// Converts submitted records, returning the readable ones and the number dropped.
pub fn convert_records(records: Vec<RecordRequest>) -> (Vec<WorkRecord>, usize) {
    let submitted = records.len();
    let converted: Vec<WorkRecord> = records
        .into_iter()
        .filter_map(RecordRequest::into_record)
        .collect();
    let dropped = submitted - converted.len();
    (converted, dropped)
}

/// Request body for the stateless `/calculate` endpoint.
///
/// `records` is the full collection; nothing is read from the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The selected period (1-12).
    pub period_id: u32,
    /// Base hourly rate for the night-shift differential; the configured
    /// default is used when absent.
    #[serde(default)]
    pub base_hourly_rate: Option<Decimal>,
    /// The full record collection.
    #[serde(default)]
    pub records: Vec<RecordRequest>,
    /// Unsaved edits to the period's primary range.
    #[serde(default)]
    pub draft: Option<Vec<RecordRequest>>,
}

/// Request body for `POST /periods/:period_id/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Base hourly rate; the configured default is used when absent.
    #[serde(default)]
    pub base_hourly_rate: Option<Decimal>,
    /// Unsaved edits to the period's primary range.
    #[serde(default)]
    pub draft: Option<Vec<RecordRequest>>,
}

/// Request body for `PUT /periods/:period_id/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceRecordsRequest {
    /// The records that replace the period's primary range.
    pub records: Vec<RecordRequest>,
}
