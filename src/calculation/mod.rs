//! Calculation logic for the work hours analyzer.
//!
//! This module contains the record filter, the metrics aggregator, overtime
//! and night-shift premium rules, the upsert-by-range merge used when an edit
//! is saved, and the period summary that runs them together for one period.

mod checked;
mod metrics;
mod night_shift;
mod overtime;
mod period_summary;
mod premium;
mod record_filter;
mod record_merge;

pub use metrics::aggregate;
pub use night_shift::{
    DEFAULT_NIGHT_SHIFT_BLOCK_HOURS, DEFAULT_NIGHT_SHIFT_MULTIPLIER,
    DEFAULT_NIGHT_SHIFT_QUALIFYING_HOURS, night_shift_hours, night_shift_rate,
};
pub use overtime::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, OvertimeSplit, overtime_premium,
    split_overtime,
};
pub use period_summary::{summarize_draft, summarize_period};
pub use premium::{calculate_premiums, calculate_premiums_with_rules};
pub use record_filter::filter_records;
pub use record_merge::merge_records;
