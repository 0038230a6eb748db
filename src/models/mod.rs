//! Core data models for the hours analyzer.
//!
//! This module contains all the domain models used throughout the engine.

mod metrics;
mod period;
mod period_report;
mod premium;
mod work_record;

pub use metrics::MetricsResult;
pub use period::{FIRST_PERIOD, LAST_PERIOD, PeriodDefinition, is_valid_period_id};
pub use period_report::{AuditStep, AuditTrace, AuditWarning, PeriodReport};
pub use premium::{PremiumLine, PremiumResult};
pub use work_record::{DateRange, EditDraft, WorkRecord, parse_record_date};
