//! HTTP API module for the hours analyzer.
//!
//! This module provides the REST API endpoints for browsing periods,
//! computing period reports and saving edited records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculateRequest, RecordRequest, ReplaceRecordsRequest, SummaryRequest, convert_records,
};
pub use response::{ApiError, PeriodRecordsResponse, PeriodsResponse, SaveResponse};
pub use state::AppState;
