//! HTTP request handlers for the hours analyzer API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{JsonRejection, MissingJsonContentType},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{filter_records, merge_records, summarize_draft, summarize_period};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditWarning, EditDraft, PeriodReport, WorkRecord};

use super::request::{CalculateRequest, ReplaceRecordsRequest, SummaryRequest, convert_records};
use super::response::{
    ApiError, ApiErrorResponse, PeriodRecordsResponse, PeriodsResponse, SaveResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", get(list_periods_handler))
        .route("/calculate", post(calculate_handler))
        .route(
            "/periods/:period_id/records",
            get(period_records_handler).put(replace_records_handler),
        )
        .route("/periods/:period_id/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for GET /periods.
async fn list_periods_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_response(PeriodsResponse {
        schedule_name: config.schedule_name().to_string(),
        periods: config.calendar().periods().to_vec(),
    })
}

/// Handler for POST /calculate endpoint.
///
/// Computes a period report over the records in the request body without
/// touching the record store.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let (records, dropped) = convert_records(request.records);
    let draft = request.draft.map(convert_records);

    match compute_report(
        &state,
        request.period_id,
        request.base_hourly_rate,
        &records,
        dropped,
        draft,
    ) {
        Ok(report) => {
            log_report(correlation_id, &report, started);
            json_response(report)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /periods/:period_id/records.
///
/// Returns the stored records inside the period's primary range.
async fn period_records_handler(
    State(state): State<AppState>,
    Path(raw_period): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let period_id = match parse_period(correlation_id, &raw_period) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let period = match state.config().calendar().period(period_id) {
        Ok(period) => period.clone(),
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match load_records(&state).await {
        Ok(stored) => {
            let records = filter_records(&stored, period.primary_range);
            info!(
                correlation_id = %correlation_id,
                period_id = period_id,
                stored = stored.len(),
                selected = records.len(),
                "Listed period records"
            );
            json_response(PeriodRecordsResponse { period, records })
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /periods/:period_id/summary.
///
/// Computes a period report over the stored records, or over an unsaved draft
/// when the body carries one. An empty body uses the defaults.
async fn summary_handler(
    State(state): State<AppState>,
    Path(raw_period): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period = %raw_period, "Processing summary request");

    let period_id = match parse_period(correlation_id, &raw_period) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let request = match summary_request(&headers, &body) {
        Ok(req) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let stored = match load_records(&state).await {
        Ok(records) => records,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let draft = request.draft.map(convert_records);

    match compute_report(&state, period_id, request.base_hourly_rate, &stored, 0, draft) {
        Ok(report) => {
            log_report(correlation_id, &report, started);
            json_response(report)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Parses an optional summary body. A non-empty body must be JSON.
fn summary_request(headers: &HeaderMap, body: &Bytes) -> Result<SummaryRequest, JsonRejection> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SummaryRequest::default());
    }
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return Err(MissingJsonContentType::default().into());
    }
    Json::<SummaryRequest>::from_bytes(body).map(|Json(req)| req)
}

/// Handler for PUT /periods/:period_id/records.
///
/// Replaces the period's primary range in the stored collection with the
/// submitted records and saves the result. Save cycles run one at a time.
async fn replace_records_handler(
    State(state): State<AppState>,
    Path(raw_period): Path<String>,
    payload: Result<Json<ReplaceRecordsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period = %raw_period, "Processing save request");

    let period_id = match parse_period(correlation_id, &raw_period) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let range = match state.config().calendar().range_for(period_id) {
        Ok(range) => range,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (replacement, dropped) = convert_records(request.records);
    if dropped > 0 {
        warn!(
            correlation_id = %correlation_id,
            dropped = dropped,
            "Dropped submitted records with unreadable dates"
        );
    }

    let _guard = state.save_lock().lock().await;

    let stored = match load_records(&state).await {
        Ok(records) => records,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let removed = stored.iter().filter(|r| range.contains(r.date)).count();
    let merged = merge_records(&stored, range, &replacement);
    let total_records = merged.len();

    if let Err(err) = save_records(&state, merged).await {
        return engine_error_response(correlation_id, err);
    }

    info!(
        correlation_id = %correlation_id,
        period_id = period_id,
        removed = removed,
        written = replacement.len(),
        total_records = total_records,
        "Saved period records"
    );

    json_response(SaveResponse {
        period_id,
        removed,
        written: replacement.len(),
        dropped,
        total_records,
    })
}

/// Runs the period summary, over a draft when one is given.
fn compute_report(
    state: &AppState,
    period_id: u32,
    base_hourly_rate: Option<Decimal>,
    records: &[WorkRecord],
    dropped: usize,
    draft: Option<(Vec<WorkRecord>, usize)>,
) -> EngineResult<PeriodReport> {
    let config = state.config();
    let base_hourly_rate = config.base_hourly_rate(base_hourly_rate);

    let (mut report, dropped) = match draft {
        Some((draft_records, draft_dropped)) => {
            let draft = EditDraft::new(period_id, draft_records);
            let report = summarize_draft(
                config.calendar(),
                config.premium_rules(),
                &draft,
                records,
                base_hourly_rate,
            )?;
            (report, dropped + draft_dropped)
        }
        None => {
            let report = summarize_period(
                config.calendar(),
                config.premium_rules(),
                period_id,
                records,
                base_hourly_rate,
            )?;
            (report, dropped)
        }
    };

    if dropped > 0 {
        report.audit_trace.warnings.push(AuditWarning {
            code: "DROPPED_RECORDS".to_string(),
            message: format!("{} submitted records had an unreadable date and were ignored", dropped),
            severity: "medium".to_string(),
        });
    }

    Ok(report)
}

async fn load_records(state: &AppState) -> EngineResult<Vec<WorkRecord>> {
    let store = state.store();
    tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| EngineError::StoreError {
            path: "record store".to_string(),
            message: e.to_string(),
        })?
}

async fn save_records(state: &AppState, records: Vec<WorkRecord>) -> EngineResult<()> {
    let store = state.store();
    tokio::task::spawn_blocking(move || store.save(&records))
        .await
        .map_err(|e| EngineError::StoreError {
            path: "record store".to_string(),
            message: e.to_string(),
        })?
}

fn parse_period(correlation_id: Uuid, raw: &str) -> Result<u32, Response> {
    raw.parse::<u32>().map_err(|_| {
        warn!(correlation_id = %correlation_id, period = %raw, "Unreadable period id");
        error_response(ApiErrorResponse::bad_request(ApiError::invalid_period(raw)))
    })
}

fn log_report(correlation_id: Uuid, report: &PeriodReport, started: Instant) {
    let total_premium = report
        .premium
        .as_ref()
        .map(|p| p.total_premium())
        .unwrap_or_default();
    info!(
        correlation_id = %correlation_id,
        period_id = report.period.id,
        total_hours = %report.metrics.total_hours,
        pay_per_hour = %report.metrics.pay_per_hour,
        total_premium = %total_premium,
        duration_us = started.elapsed().as_micros(),
        "Calculation completed successfully"
    );
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    error_response(err.into())
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
