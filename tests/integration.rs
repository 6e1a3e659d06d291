//! Integration tests for the timesheet engine.
//!
//! This test suite covers:
//! - Ordinary weekday shifts and free-text clock times
//! - Saturday and Sunday loading, including midnight-crossing shifts
//! - Shift penalties and special loading
//! - Overtime shifts and WOBOD
//! - OFF, ADO and sick days
//! - Fortnight totals and public-holiday warnings
//! - Rate table endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::calculation::{
    DayType, RateName, build_rate_table, classify_date, segment_by_midnight,
};
use timesheet_engine::config::{BaseRates, ConfigLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body))
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
    send(router, "POST", "/calculate", Some(body.to_string())).await
}

fn create_request(days: Vec<Value>) -> Value {
    json!({ "days": days })
}

fn create_day(day: &str, date: &str, clock_on: &str, clock_off: &str) -> Value {
    json!({
        "day": day,
        "date": date,
        "clock_on": clock_on,
        "clock_off": clock_off
    })
}

fn with(mut day: Value, key: &str, value: Value) -> Value {
    day[key] = value;
    day
}

async fn calculate_single(day: Value) -> Value {
    let (status, result) = post_calculate(create_router_for_test(), create_request(vec![day])).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {}", result);
    result
}

fn assert_money(actual: &Value, expected: &str) {
    let actual = actual.as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn assert_total(result: &Value, expected: &str) {
    assert_money(&result["totals"]["total"], expected);
}

fn breakdown(result: &Value, index: usize) -> &Value {
    &result["days"][index]["breakdown"]
}

// =============================================================================
// Ordinary weekday shifts
// =============================================================================

#[tokio::test]
async fn test_weekday_8h() {
    let result = calculate_single(create_day("Monday", "2025-11-17", "07:00", "15:00")).await;

    // 8h × $49.81842 = $398.54736
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "398.55");
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "0");
    assert_total(&result, "398.55");
}

#[tokio::test]
async fn test_compact_clock_times() {
    let result = calculate_single(create_day("Monday", "2025-11-17", "730", "1530")).await;

    assert_money(&result["days"][0]["worked_hours"], "8");
    assert_total(&result, "398.55");
}

#[tokio::test]
async fn test_unparseable_times_default_to_8h() {
    let result = calculate_single(create_day("Tuesday", "2025-11-18", "soon", "later")).await;

    assert_money(&result["days"][0]["worked_hours"], "8");
    assert_total(&result, "398.55");
}

#[tokio::test]
async fn test_worked_duration_override() {
    let day = with(
        create_day("Wednesday", "2025-11-19", "", ""),
        "worked",
        json!("10:00"),
    );
    let result = calculate_single(day).await;

    // 10h × $49.81842 = $498.1842
    assert_total(&result, "498.18");
}

// =============================================================================
// Weekend loading
// =============================================================================

#[tokio::test]
async fn test_saturday_8h() {
    let result = calculate_single(create_day("Saturday", "2025-11-15", "07:00", "15:00")).await;

    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "398.55");
    // 8h × $24.90921 = $199.27368
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "199.27");
    assert_total(&result, "597.82");
}

#[tokio::test]
async fn test_sunday_8h() {
    let result = calculate_single(create_day("Sunday", "2025-11-16", "07:00", "15:00")).await;

    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "398.55");
    assert_total(&result, "797.10");
}

#[tokio::test]
async fn test_saturday_night_into_sunday() {
    let result = calculate_single(create_day("Saturday", "2025-11-15", "19:00", "02:33")).await;
    let day = &result["days"][0];

    assert_money(&day["components"]["saturday_hours"], "5");
    assert_money(&day["components"]["sunday_hours"], "2.55");
    // 7.55h × $49.81842 = $376.129071
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "376.13");
    // 5h × $24.90921 + 2.55h × $49.81842 = $251.583021
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "251.58");
    assert_total(&result, "627.71");
}

#[tokio::test]
async fn test_friday_night_into_saturday() {
    let result = calculate_single(create_day("Friday", "2025-11-14", "22:00", "06:00")).await;

    // Only the 6 Saturday hours are loaded: 6h × $24.90921 = $149.45526
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "149.46");
    assert_total(&result, "548.01");
}

#[tokio::test]
async fn test_sunday_night_into_monday() {
    let result = calculate_single(create_day("Sunday", "2025-11-16", "22:00", "06:00")).await;

    // Only the 2 Sunday hours are loaded: 2h × $49.81842 = $99.63684
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "99.64");
    assert_money(&result["days"][0]["components"]["night_hours"], "0");
    assert_total(&result, "498.19");
}

#[tokio::test]
async fn test_weekend_without_clock_times_uses_day_label() {
    let result = calculate_single(create_day("Sunday", "2025-11-16", "", "")).await;

    assert_money(&result["days"][0]["components"]["sunday_hours"], "8");
    assert_total(&result, "797.10");
}

#[tokio::test]
async fn test_weekend_duration_without_clock_times_is_not_rounded() {
    let day = with(
        create_day("Saturday", "2025-11-15", "", ""),
        "worked",
        json!("7:20"),
    );
    let result = calculate_single(day).await;

    // 7.3333...h × $24.90921 = $182.66754
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "182.67");
    // 7.3333...h × $49.81842 = $365.33508
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "365.34");
    assert_total(&result, "548.01");
}

#[tokio::test]
async fn test_equal_clock_times_earn_no_weekend_loading() {
    let result = calculate_single(create_day("Saturday", "2025-11-15", "09:00", "09:00")).await;

    assert_money(&result["days"][0]["components"]["saturday_hours"], "0");
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "0");
    assert_total(&result, "398.55");
}

// =============================================================================
// Penalties and special loading
// =============================================================================

#[tokio::test]
async fn test_afternoon_penalty_with_special_loading() {
    let day = create_day("Tuesday", "2025-11-18", "14:00", "22:30");
    let day = with(day, "penalty", json!("Afternoon"));
    let day = with(day, "special", json!("Yes"));
    let result = calculate_single(day).await;

    // floor(8.5) × $4.84 = $38.72
    assert_money(&breakdown(&result, 0)["penalty_pay"], "38.72");
    assert_money(&breakdown(&result, 0)["special_loading_pay"], "5.69");
    assert_money(&result["days"][0]["components"]["night_hours"], "4.5");
    assert_total(&result, "467.87");
}

#[tokio::test]
async fn test_night_penalty_floors_worked_hours() {
    let day = with(create_day("Wednesday", "2025-11-19", "", ""), "worked", json!("745"));
    let day = with(day, "penalty", json!("night"));
    let result = calculate_single(day).await;

    // floor(7.75) × $5.69 = $39.83
    assert_money(&breakdown(&result, 0)["penalty_pay"], "39.83");
    // 7.75h × $49.81842 = $386.092755
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "386.09");
    assert_total(&result, "425.92");
}

#[tokio::test]
async fn test_unknown_penalty_selector_is_ignored() {
    let day = with(
        create_day("Monday", "2025-11-17", "07:00", "15:00"),
        "penalty",
        json!("Evening"),
    );
    let result = calculate_single(day).await;

    assert_money(&breakdown(&result, 0)["penalty_pay"], "0");
    assert_total(&result, "398.55");
}

// =============================================================================
// Overtime shifts and WOBOD
// =============================================================================

#[tokio::test]
async fn test_sunday_overtime_hour_with_wobod() {
    let day = create_day("Sunday", "2025-11-16", "10:00", "11:00");
    let day = with(day, "ot", json!(true));
    let day = with(day, "wobod", json!(true));
    let result = calculate_single(day).await;
    let calc = &result["days"][0];

    // 1h × $49.81842 × (2.5 − 1) = $74.72763
    assert_money(&calc["overtime"]["ot_pay"], "74.73");
    // 1h × $49.81842 × 0.5 = $24.90921
    assert_money(&calc["overtime"]["wobod_pay"], "24.91");
    assert_money(&breakdown(&result, 0)["overtime_total"], "99.64");
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "0");
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "0");
    assert_total(&result, "99.64");
}

#[tokio::test]
async fn test_overtime_across_midnight_uses_each_days_multiplier() {
    let day = with(
        create_day("Saturday", "2025-11-15", "19:00", "02:33"),
        "ot",
        json!(true),
    );
    let result = calculate_single(day).await;

    // 5h × $49.81842 × 1.0 + 2.55h × $49.81842 × 1.5 = $439.6475565
    assert_money(&result["days"][0]["overtime"]["ot_pay"], "439.65");
    assert_money(&result["days"][0]["overtime"]["ot_hours"], "7.55");
    assert_total(&result, "439.65");
}

#[tokio::test]
async fn test_wobod_without_overtime_has_no_effect() {
    let day = with(
        create_day("Monday", "2025-11-17", "07:00", "15:00"),
        "wobod",
        json!(true),
    );
    let result = calculate_single(day).await;

    assert_money(&breakdown(&result, 0)["overtime_total"], "0");
    assert_total(&result, "398.55");
}

#[tokio::test]
async fn test_overtime_with_equal_clock_times_pays_nothing() {
    let day = create_day("Saturday", "2025-11-15", "0900", "09:00");
    let day = with(with(day, "ot", json!(true)), "wobod", json!(true));
    let result = calculate_single(day).await;

    assert_money(&result["days"][0]["overtime"]["ot_pay"], "0");
    assert_money(&result["days"][0]["overtime"]["wobod_pay"], "0");
    assert_total(&result, "0");
}

// =============================================================================
// OFF, ADO and sick days
// =============================================================================

#[tokio::test]
async fn test_off_day_pays_nothing() {
    let day = create_day("Saturday", "2025-11-15", "07:00", "15:00");
    let day = with(day, "roster", json!("OFF"));
    let day = with(day, "ot", json!(true));
    let day = with(day, "wobod", json!(true));
    let result = calculate_single(day).await;

    assert_eq!(result["days"][0]["status"], "off");
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "0");
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "0");
    assert_money(&breakdown(&result, 0)["overtime_total"], "0");
    assert_total(&result, "0");
}

#[tokio::test]
async fn test_ado_with_sick_applies_adjustment_once() {
    let day = create_day("Sunday", "2025-11-16", "07:00", "15:00");
    let day = with(day, "roster", json!("ADO"));
    let day = with(day, "ado", json!(true));
    let day = with(day, "sick", json!(true));
    let result = calculate_single(day).await;

    assert_eq!(result["days"][0]["status"], "ado");
    // 4h × $49.81842 = $199.27368
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "199.27");
    assert_money(&breakdown(&result, 0)["weekend_loading_pay"], "0");
    // 8h × $49.81842 = $398.54736
    assert_money(&breakdown(&result, 0)["sick_pay"], "398.55");
    assert_total(&result, "597.82");
}

#[tokio::test]
async fn test_sick_pay_is_added_to_worked_day() {
    let day = with(
        create_day("Thursday", "2025-11-20", "07:00", "11:00"),
        "sick",
        json!(true),
    );
    let result = calculate_single(day).await;

    // 4h × $49.81842 + 8h sick
    assert_money(&breakdown(&result, 0)["ordinary_base_pay"], "199.27");
    assert_money(&breakdown(&result, 0)["sick_pay"], "398.55");
    assert_total(&result, "597.82");
}

// =============================================================================
// Fortnight totals
// =============================================================================

fn blank_fortnight(start: &str, count: usize) -> Vec<Value> {
    NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .unwrap()
        .iter_days()
        .take(count)
        .map(|date| {
            json!({
                "day": date.format("%A").to_string(),
                "date": date.to_string()
            })
        })
        .collect()
}

#[tokio::test]
async fn test_full_fortnight_total() {
    let days = blank_fortnight("2025-11-17", 14);
    let (status, result) = post_calculate(create_router_for_test(), create_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"].as_array().unwrap().len(), 14);
    assert_eq!(result["totals"]["days"], 14);
    // 14 × $398.55 ordinary
    assert_money(&result["totals"]["ordinary_base_pay"], "5579.70");
    // 2 × $199.27 Saturday + 2 × $398.55 Sunday loading
    assert_money(&result["totals"]["weekend_loading_pay"], "1195.64");
    assert_total(&result, "6775.34");
}

#[tokio::test]
async fn test_fortnight_total_independent_of_day_order() {
    let days = blank_fortnight("2025-11-17", 14);
    let mut reversed = days.clone();
    reversed.reverse();

    let (_, forward) = post_calculate(create_router_for_test(), create_request(days)).await;
    let (_, backward) = post_calculate(create_router_for_test(), create_request(reversed)).await;

    assert_eq!(forward["totals"], backward["totals"]);
}

#[tokio::test]
async fn test_public_holiday_in_request_warns() {
    let body = json!({
        "public_holidays": [ { "date": "2025-11-18", "name": "Test Holiday", "region": "NSW" } ],
        "days": [ create_day("Tuesday", "2025-11-18", "07:00", "15:00") ]
    });
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "PUBLIC_HOLIDAY_NOT_APPLIED");
    assert!(warnings[0]["message"].as_str().unwrap().contains("Test Holiday"));
    assert_total(&result, "398.55");
}

#[tokio::test]
async fn test_request_base_rates_override_configuration() {
    let body = json!({
        "base_rates": { "ordinary": "40", "afternoon_penalty": "4", "night_penalty": "5" },
        "days": [ create_day("Monday", "2025-11-17", "07:00", "15:00") ]
    });
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result["rate_table"]["ordinary_hours"], "40");
    assert_total(&result, "320");
}

// =============================================================================
// Rate table endpoints
// =============================================================================

#[tokio::test]
async fn test_get_rates() {
    let (status, table) = send(create_router_for_test(), "GET", "/rates", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(table.as_object().unwrap().len(), 15);
    assert_money(&table["ot_150"], "74.72763");
    assert_money(&table["saturday_loading"], "24.90921");
    assert_money(&table["special_loading"], "5.69");
}

#[tokio::test]
async fn test_post_rates_rejects_negative_values() {
    let body = json!({ "ordinary": "49.81842", "afternoon_penalty": "-1", "night_penalty": "5.69" });
    let (status, error) = send(
        create_router_for_test(),
        "POST",
        "/rates",
        Some(body.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_BASE_RATE");
}

#[tokio::test]
async fn test_post_rates_accepts_zero_values() {
    let body = json!({ "ordinary": "0", "afternoon_penalty": "0", "night_penalty": "0" });
    let (status, table) = send(
        create_router_for_test(),
        "POST",
        "/rates",
        Some(body.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&table["ot_250"], "0");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let (status, error) = send(
        create_router_for_test(),
        "POST",
        "/calculate",
        Some("{ \"days\": [".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_days_array() {
    let (status, error) = post_calculate(create_router_for_test(), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_unknown_day_name() {
    let day = create_day("Funday", "2025-11-17", "07:00", "15:00");
    let (status, error) = post_calculate(create_router_for_test(), create_request(vec![day])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_more_than_fourteen_days() {
    let days = blank_fortnight("2025-11-17", 15);
    let (status, error) = post_calculate(create_router_for_test(), create_request(days)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_error_duplicate_dates() {
    let days = vec![
        create_day("Monday", "2025-11-17", "07:00", "15:00"),
        create_day("Monday", "2025-11-17", "16:00", "20:00"),
    ];
    let (status, error) = post_calculate(create_router_for_test(), create_request(days)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PAY_PERIOD");
}

// =============================================================================
// Result structure
// =============================================================================

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let result = calculate_single(create_day("Monday", "2025-11-17", "07:00", "15:00")).await;

    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());
    assert!(result["rate_table"].is_object());
    assert!(result["days"].is_array());
    assert!(result["totals"].is_object());
    assert!(result["audit_trace"]["warnings"].is_array());
    assert!(result["audit_trace"]["duration_us"].is_number());
}

#[tokio::test]
async fn test_each_day_carries_audit_steps() {
    let result = calculate_single(create_day("Saturday", "2025-11-15", "07:00", "15:00")).await;
    let steps = result["days"][0]["audit_steps"].as_array().unwrap();

    let rule_ids: Vec<&str> = steps
        .iter()
        .map(|step| step["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "shift_penalty",
            "special_loading",
            "sick_pay",
            "ordinary_pay",
            "weekend_loading"
        ]
    );
    assert_eq!(steps[4]["rate_ref"], "saturday_loading");
}

// =============================================================================
// Engine properties without HTTP
// =============================================================================

fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
        .unwrap()
}

#[test]
fn test_rate_table_is_deterministic() {
    let base = BaseRates {
        ordinary: decimal("37.123456"),
        afternoon_penalty: decimal("3.3"),
        night_penalty: decimal("4.4"),
    };
    assert_eq!(build_rate_table(&base), build_rate_table(&base));
    assert_eq!(
        build_rate_table(&base).get(RateName::Ot150).unwrap(),
        decimal("55.68518")
    );
}

#[test]
fn test_midnight_crossing_segments() {
    let segments = segment_by_midnight(
        make_datetime("2025-11-15", "19:00:00"),
        make_datetime("2025-11-16", "02:33:00"),
    );

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start_time, make_datetime("2025-11-15", "19:00:00"));
    assert_eq!(segments[0].end_time, make_datetime("2025-11-16", "00:00:00"));
    assert_eq!(segments[0].hours, decimal("5"));
    assert_eq!(segments[1].start_time, make_datetime("2025-11-16", "00:00:00"));
    assert_eq!(segments[1].end_time, make_datetime("2025-11-16", "02:33:00"));
    assert_eq!(segments[1].hours, decimal("2.55"));
}

#[test]
fn test_day_classification_follows_calendar() {
    let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert_eq!(classify_date(date("2025-11-15")), DayType::Saturday);
    assert_eq!(classify_date(date("2025-11-16")), DayType::Sunday);
    assert_eq!(classify_date(date("2025-11-17")), DayType::Weekday);
}
