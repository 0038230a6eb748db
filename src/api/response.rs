//! Response types for the hours analyzer API.
//!
//! This module defines the success bodies that are not plain domain types,
//! the error response structures, and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PeriodDefinition, WorkRecord};

/// Body of `GET /periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodsResponse {
    /// Name of the loaded schedule.
    pub schedule_name: String,
    /// The twelve periods ordered by id.
    pub periods: Vec<PeriodDefinition>,
}

/// Body of `GET /periods/:period_id/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRecordsResponse {
    /// The selected period.
    pub period: PeriodDefinition,
    /// Stored records inside the primary range, in stored order.
    pub records: Vec<WorkRecord>,
}

/// Body of `PUT /periods/:period_id/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// The period whose primary range was replaced.
    pub period_id: u32,
    /// Stored records removed from the primary range.
    pub removed: usize,
    /// Replacement records written.
    pub written: usize,
    /// Submitted records dropped for an unreadable date.
    pub dropped: usize,
    /// Size of the stored collection after the save.
    pub total_records: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid period error response.
    pub fn invalid_period(period: impl std::fmt::Display) -> Self {
        Self::with_details(
            "INVALID_PERIOD",
            format!("Invalid period: {}", period),
            "Periods are numbered 1 to 12",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidPeriod { period_id } => {
                ApiErrorResponse::bad_request(ApiError::invalid_period(period_id))
            }
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid schedule", message),
            },
            EngineError::StoreError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Record store error",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
