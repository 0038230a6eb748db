//! Integration tests for the hours analyzer.
//!
//! This test suite drives the HTTP API end to end:
//! - Period listing
//! - Metrics over a primary range
//! - Overtime and night-shift premiums over a premium range
//! - Periods whose primary range is inverted
//! - Unsaved drafts
//! - Saving edits through the CSV record store
//! - Error cases

use std::fs;
use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use hours_analyzer::api::{AppState, create_router};
use hours_analyzer::config::ConfigLoader;
use hours_analyzer::store::{CsvRecordStore, MemoryRecordStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/pay-months-2025").expect("Failed to load config")
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(load_config(), MemoryRecordStore::default()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .map(decimal)
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value));
    assert_eq!(actual, decimal(expected), "value {}", value);
}

fn rec(date: &str, hours: &str, pay: &str) -> Value {
    json!({ "date": date, "hours": hours, "pay": pay })
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(router, "POST", "/calculate", Some(body)).await
}

/// A year of records touching several periods.
fn year_records() -> Vec<Value> {
    vec![
        rec("2024-12-20", "8", "90"),
        rec("2025-01-20", "8", "100"),
        rec("2025-02-03", "12", "150"),
        rec("2025-03-10", "0", "0"),
        rec("2025-04-14", "12", "150"),
        rec("2025-04-15", "9", "110"),
        rec("2025-05-12", "12", "150"),
        rec("2025-06-02", "11.5", "140"),
    ]
}

// =============================================================================
// SECTION 1: Period Calendar
// =============================================================================

#[tokio::test]
async fn test_periods_lists_all_twelve_in_order() {
    let (status, body) = send(create_router_for_test(), "GET", "/periods", None).await;

    assert_eq!(status, StatusCode::OK);
    let periods = body["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 12);
    for (index, period) in periods.iter().enumerate() {
        assert_eq!(period["id"].as_u64().unwrap(), index as u64 + 1);
    }
}

#[tokio::test]
async fn test_periods_carry_literal_ranges() {
    let (_, body) = send(create_router_for_test(), "GET", "/periods", None).await;
    let periods = body["periods"].as_array().unwrap();

    assert_eq!(periods[0]["primary_range"]["start"], "2025-01-11");
    assert_eq!(periods[0]["primary_range"]["end"], "2024-12-09");
    assert!(periods[0].get("premium_range").is_none());

    assert_eq!(periods[4]["primary_range"]["start"], "2025-01-11");
    assert_eq!(periods[4]["primary_range"]["end"], "2025-04-09");
    assert_eq!(periods[4]["premium_range"]["start"], "2025-04-11");
    assert_eq!(periods[4]["premium_range"]["end"], "2025-05-09");
}

// =============================================================================
// SECTION 2: Metrics
// =============================================================================

#[tokio::test]
async fn test_metrics_one_working_day_and_one_zero_day() {
    // 8h / 100 plus a zero day: pay per hour 12.5, one working day
    let body = json!({
        "period_id": 5,
        "records": [rec("2025-03-03", "8", "100"), rec("2025-03-04", "0", "0")]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let metrics = &report["metrics"];
    assert_decimal(&metrics["total_hours"], "8");
    assert_decimal(&metrics["total_pay"], "100");
    assert_eq!(metrics["working_days"], 1);
    assert_decimal(&metrics["avg_hours_per_day"], "8");
    assert_decimal(&metrics["avg_pay_per_day"], "100");
    assert_decimal(&metrics["pay_per_hour"], "12.5");
}

#[tokio::test]
async fn test_metrics_ignore_records_outside_primary_range() {
    let body = json!({ "period_id": 5, "records": year_records() });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    let metrics = &report["metrics"];
    assert_decimal(&metrics["total_hours"], "20");
    assert_decimal(&metrics["total_pay"], "250");
    assert_eq!(metrics["working_days"], 2);
    assert_decimal(&metrics["avg_hours_per_day"], "10");
    assert_decimal(&metrics["pay_per_hour"], "12.5");
}

#[tokio::test]
async fn test_metrics_pay_without_hours() {
    let body = json!({ "period_id": 6, "records": [rec("2025-03-03", "0", "250")] });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    let metrics = &report["metrics"];
    assert_decimal(&metrics["total_pay"], "250");
    assert_eq!(metrics["working_days"], 0);
    assert_decimal(&metrics["avg_pay_per_day"], "0");
    assert_decimal(&metrics["pay_per_hour"], "0");
}

#[tokio::test]
async fn test_metrics_sum_duplicate_dates() {
    let body = json!({
        "period_id": 6,
        "records": [rec("2025-03-03", "8", "100"), rec("2025-03-03", "4", "50")]
    });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    assert_decimal(&report["metrics"]["total_hours"], "12");
    assert_eq!(report["metrics"]["working_days"], 2);
}

// =============================================================================
// SECTION 3: Premiums
// =============================================================================

#[tokio::test]
async fn test_premium_12h_day_earns_overtime_and_night_shift() {
    // Primary range gives pay per hour 10; one 12h day in the premium range.
    // OT = 4 * 10 * 1.6 = 64, NS = 8 * (10 * 1.3 - 5) = 64
    let body = json!({
        "period_id": 5,
        "base_hourly_rate": "5",
        "records": [rec("2025-02-03", "10", "100"), rec("2025-04-14", "12", "0")]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let premium = &report["premium"];
    let line = &premium["per_record"][0];
    assert_decimal(&line["ot_hours"], "4");
    assert_decimal(&line["ot_premium"], "64");
    assert_decimal(&line["ns_hours"], "8");
    assert_decimal(&line["ns_premium"], "64");
    assert_decimal(&premium["total_ot_premium"], "64");
    assert_decimal(&premium["total_ns_premium"], "64");
}

#[tokio::test]
async fn test_premium_11_5h_day_earns_overtime_only() {
    let body = json!({
        "period_id": 5,
        "base_hourly_rate": "5",
        "records": [rec("2025-02-03", "10", "100"), rec("2025-04-14", "11.5", "0")]
    });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    let line = &report["premium"]["per_record"][0];
    assert_decimal(&line["ot_hours"], "3.5");
    assert_decimal(&line["ot_premium"], "56");
    assert_decimal(&line["ns_hours"], "0");
    assert_decimal(&line["ns_premium"], "0");
}

#[tokio::test]
async fn test_premium_uses_full_set_not_primary_subset() {
    let body = json!({ "period_id": 5, "base_hourly_rate": "5", "records": year_records() });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    let lines = report["premium"]["per_record"].as_array().unwrap();
    let dates: Vec<&str> = lines.iter().map(|l| l["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2025-04-14", "2025-04-15"]);
    // (4 + 1) * 12.5 * 1.6
    assert_decimal(&report["premium"]["total_ot_premium"], "100");
    // 8 * (12.5 * 1.3 - 5)
    assert_decimal(&report["premium"]["total_ns_premium"], "90");
}

#[tokio::test]
async fn test_premium_night_shift_can_be_negative() {
    let body = json!({
        "period_id": 5,
        "base_hourly_rate": "20",
        "records": [rec("2025-02-03", "10", "100"), rec("2025-04-14", "12", "0")]
    });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    assert_decimal(&report["premium"]["ns_premium_rate"], "-7");
    assert_decimal(&report["premium"]["total_ns_premium"], "-56");
}

#[tokio::test]
async fn test_premium_default_base_rate_comes_from_config() {
    // premiums.yaml sets the default base hourly rate to 0
    let body = json!({
        "period_id": 5,
        "records": [rec("2025-02-03", "10", "100"), rec("2025-04-14", "12", "0")]
    });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    assert_decimal(&report["base_hourly_rate"], "0");
    // 8 * (10 * 1.3 - 0)
    assert_decimal(&report["premium"]["total_ns_premium"], "104");
}

#[tokio::test]
async fn test_period_without_premium_range_has_no_premium() {
    let body = json!({ "period_id": 3, "records": year_records() });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(report.get("premium").is_none());
}

// =============================================================================
// SECTION 4: Inverted Periods
// =============================================================================

#[tokio::test]
async fn test_inverted_period_reports_zeros() {
    let body = json!({ "period_id": 1, "records": year_records() });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&report["metrics"]["total_hours"], "0");
    assert_eq!(report["metrics"]["working_days"], 0);
    assert_decimal(&report["metrics"]["pay_per_hour"], "0");
    let warnings = report["audit_trace"]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "INVERTED_PERIOD_RANGE"));
}

// =============================================================================
// SECTION 5: Drafts
// =============================================================================

#[tokio::test]
async fn test_calculate_with_draft_uses_draft_metrics() {
    let body = json!({
        "period_id": 5,
        "base_hourly_rate": "5",
        "records": year_records(),
        "draft": [rec("2025-02-03", "10", "200"), rec("2025-04-12", "12", "240")]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&report["metrics"]["total_hours"], "22");
    assert_decimal(&report["metrics"]["pay_per_hour"], "20");

    let lines = report["premium"]["per_record"].as_array().unwrap();
    let dates: Vec<&str> = lines.iter().map(|l| l["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2025-04-14", "2025-04-15", "2025-04-12"]);
}

// =============================================================================
// SECTION 6: Saving Through The CSV Store
// =============================================================================

fn csv_router(dir: &TempDir, content: &str) -> (Router, std::path::PathBuf) {
    let path = dir.path().join("records.csv");
    fs::write(&path, content).unwrap();
    let state = AppState::new(load_config(), CsvRecordStore::new(&path));
    (create_router(state), path)
}

const SEED_CSV: &str = "\u{feff}date,hours,payforaverage\n\
2025-01-20,8,100\n\
2025-02-03 00:00:00,12,150\n\
bad date,8,100\n\
2025-04-14,12,150\n\
2025-06-02,8,abc\n";

#[tokio::test]
async fn test_get_records_reads_csv_leniently() {
    let dir = TempDir::new().unwrap();
    let (router, _) = csv_router(&dir, SEED_CSV);

    let (status, body) = send(router.clone(), "GET", "/periods/5/records", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["date"], "2025-02-03");

    let (_, body) = send(router, "GET", "/periods/9/records", None).await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_decimal(&records[0]["pay"], "0");
}

#[tokio::test]
async fn test_save_then_reload_returns_replacement() {
    let dir = TempDir::new().unwrap();
    let (router, path) = csv_router(&dir, SEED_CSV);

    let replacement = json!({
        "records": [rec("2025-03-03", "9", "110"), rec("2025-03-04", "7.5", "90")]
    });
    let (status, saved) = send(router.clone(), "PUT", "/periods/5/records", Some(replacement)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["removed"], 2);
    assert_eq!(saved["written"], 2);
    assert_eq!(saved["total_records"], 4);

    let (_, body) = send(router.clone(), "GET", "/periods/5/records", None).await;
    let dates: Vec<&str> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-03", "2025-03-04"]);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("\u{feff}date,hours,payforaverage\n"));
    assert!(written.contains("2025-04-14,12,150"));
    assert!(!written.contains("bad date"));
}

#[tokio::test]
async fn test_summary_reflects_saved_edit() {
    let dir = TempDir::new().unwrap();
    let (router, _) = csv_router(&dir, SEED_CSV);

    let replacement = json!({ "records": [rec("2025-03-03", "10", "200")] });
    send(router.clone(), "PUT", "/periods/5/records", Some(replacement)).await;

    let (status, report) = send(
        router,
        "POST",
        "/periods/5/summary",
        Some(json!({ "base_hourly_rate": "5" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&report["metrics"]["pay_per_hour"], "20");
    // 4 * 20 * 1.6
    assert_decimal(&report["premium"]["total_ot_premium"], "128");
}

#[tokio::test]
async fn test_save_to_missing_file_creates_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.csv");
    let router = create_router(AppState::new(load_config(), CsvRecordStore::new(&path)));

    let (status, _) = send(
        router,
        "PUT",
        "/periods/6/records",
        Some(json!({ "records": [rec("2025-03-03", "8", "100")] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\u{feff}date,hours,payforaverage\n2025-03-03,8,100\n"
    );
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_period_out_of_range() {
    for period_id in [0, 13] {
        let body = json!({ "period_id": period_id, "records": year_records() });
        let (status, error) = post_calculate(create_router_for_test(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "INVALID_PERIOD");
    }
}

#[tokio::test]
async fn test_error_summary_for_unknown_period() {
    let (status, error) = send(
        create_router_for_test(),
        "POST",
        "/periods/13/summary",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_error_missing_period_id() {
    let (status, error) = post_calculate(create_router_for_test(), json!({ "records": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_wrong_type_is_malformed() {
    let (status, error) =
        post_calculate(create_router_for_test(), json!({ "period_id": "five" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// SECTION 8: Audit Trace & Response Fields
// =============================================================================

#[tokio::test]
async fn test_audit_trace_contains_steps() {
    let body = json!({ "period_id": 5, "records": year_records() });

    let (status, report) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let steps = report["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert_eq!(
        rule_ids,
        vec![
            "period_lookup",
            "record_filter",
            "metrics_aggregation",
            "premium_filter",
            "premium_calculation"
        ]
    );
    for step in steps {
        assert!(step["step_number"].is_number());
        assert!(step["rule_name"].is_string());
        assert!(step["reasoning"].is_string());
    }
    assert!(report["audit_trace"]["duration_us"].is_u64());
}

#[tokio::test]
async fn test_response_fields_present() {
    let body = json!({ "period_id": 8, "records": year_records() });

    let (_, report) = post_calculate(create_router_for_test(), body).await;

    assert!(report["report_id"].is_string());
    assert!(report["timestamp"].is_string());
    assert_eq!(report["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(report["period"]["id"], 8);
    assert_eq!(report["period"]["label"], "August (Apr 11 - Jul 9)");
}
