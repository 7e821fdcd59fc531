//! Integration tests for the Stay Allowance Engine HTTP API.
//!
//! This test suite covers:
//! - Single and multiple trip evaluations
//! - Overlapping trips
//! - Unlock event ordering and deduplication
//! - Compliance status and overstay detection
//! - Stay planning
//! - Request limits and error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use stay_engine::api::{AppState, create_router};
use stay_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/schengen").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_evaluate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn create_trip(entry_date: &str, exit_date: &str) -> Value {
    json!({ "entry_date": entry_date, "exit_date": exit_date })
}

fn create_request(trips: Vec<Value>, reference_date: &str) -> Value {
    json!({
        "trips": trips,
        "reference_date": reference_date
    })
}

fn usage_on(result: &Value, date: &str) -> u64 {
    result["usage_series"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["date"] == date)
        .unwrap_or_else(|| panic!("{} missing from usage series", date))["days_used"]
        .as_u64()
        .unwrap()
}

// =============================================================================
// Evaluation
// =============================================================================

#[tokio::test]
async fn test_single_trip_unlock() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2024-01-01", "2024-01-10")], "2024-02-01");

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["trip_count"], 1);
    assert_eq!(result["present_day_count"], 10);

    let events = result["unlock_events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["unlock_date"], "2024-07-08");
    assert_eq!(events[0]["days_available"], 90);
    assert_eq!(result["unlock_summary"][0], "08 Jul 2024: 90 days available");

    assert_eq!(usage_on(&result, "2024-07-07"), 1);
    assert_eq!(usage_on(&result, "2024-07-08"), 0);
}

#[tokio::test]
async fn test_series_bounds() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_trip("2024-03-01", "2024-03-10"),
            create_trip("2024-01-01", "2024-01-10"),
        ],
        "2024-02-01",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let series = result["usage_series"].as_array().unwrap();
    assert_eq!(series.first().unwrap()["date"], "2023-12-31");
    assert_eq!(series.last().unwrap()["date"], "2024-09-06");
}

#[tokio::test]
async fn test_overlapping_trips_counted_once() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_trip("2024-01-01", "2024-01-05"),
            create_trip("2024-01-03", "2024-01-08"),
        ],
        "2024-01-08",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["present_day_count"], 8);
    assert_eq!(result["compliance"]["days_used"], 8);
    assert_eq!(result["compliance"]["days_available"], 82);
}

#[tokio::test]
async fn test_unlock_events_sorted() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_trip("2024-05-01", "2024-05-10"),
            create_trip("2024-01-01", "2024-01-10"),
            create_trip("2024-03-01", "2024-03-05"),
        ],
        "2024-06-01",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = result["unlock_events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["unlock_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-07-08", "2024-09-01", "2024-11-06"]);
}

#[tokio::test]
async fn test_dedupe_unlock_dates() {
    let trips = vec![
        create_trip("2024-01-05", "2024-01-10"),
        create_trip("2024-01-01", "2024-01-10"),
    ];

    let (_, kept) = post_evaluate(
        create_router_for_test(),
        create_request(trips.clone(), "2024-02-01"),
    )
    .await;
    assert_eq!(kept["unlock_events"].as_array().unwrap().len(), 2);

    let (status, deduped) = post_evaluate(
        create_router_for_test(),
        json!({
            "trips": trips,
            "reference_date": "2024-02-01",
            "dedupe_unlock_dates": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deduped["unlock_events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_trips_yield_empty_outputs() {
    let router = create_router_for_test();
    let (status, result) = post_evaluate(router, create_request(vec![], "2024-01-01")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["usage_series"].as_array().unwrap().is_empty());
    assert!(result["unlock_events"].as_array().unwrap().is_empty());
    assert_eq!(result["compliance"]["status"], "compliant");
    assert_eq!(result["compliance"]["days_available"], 90);
}

#[tokio::test]
async fn test_same_day_trip_is_valid() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2024-05-05", "2024-05-05")], "2024-05-05");

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["present_day_count"], 1);
    assert_eq!(result["compliance"]["days_used"], 1);
}

// =============================================================================
// Compliance and planning
// =============================================================================

#[tokio::test]
async fn test_overstay_detected() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2024-01-01", "2024-04-05")], "2024-04-05");

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let compliance = &result["compliance"];
    assert_eq!(compliance["status"], "overstay");
    assert_eq!(compliance["days_used"], 96);
    assert_eq!(compliance["days_available"], -6);
    assert_eq!(compliance["first_overstay_date"], "2024-03-31");
    assert_eq!(compliance["overstay_day_count"], 6);
}

#[tokio::test]
async fn test_planned_entry_date() {
    let router = create_router_for_test();
    let request = json!({
        "trips": [create_trip("2024-01-01", "2024-02-29")],
        "reference_date": "2024-03-01",
        "planned_entry_date": "2024-04-01"
    });

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["planned_stay_days"], 30);
}

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2024-01-01", "2024-01-10")], "2024-02-01");

    let (_, result) = post_evaluate(router, request).await;

    for field in [
        "calculation_id",
        "timestamp",
        "engine_version",
        "trip_count",
        "present_day_count",
        "usage_series",
        "unlock_events",
        "unlock_summary",
        "compliance",
        "duration_us",
    ] {
        assert!(result.get(field).is_some(), "missing field {}", field);
    }
    assert!(result.get("planned_stay_days").is_none());
}

#[tokio::test]
async fn test_rule_endpoint() {
    let router = create_router_for_test();
    let (status, result) = send(
        router,
        Request::builder()
            .method("GET")
            .uri("/rule")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["rule"]["code"], "SCHENGEN_90_180");
    assert_eq!(result["window_days"], 180);
    assert_eq!(result["max_stay_days"], 90);
    assert_eq!(result["max_trips"], 500);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_reversed_trip() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_trip("2024-01-01", "2024-01-10"),
            create_trip("2024-03-10", "2024-03-01"),
        ],
        "2024-02-01",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_TRIP_ORDER");
    assert!(result["message"].as_str().unwrap().contains("position 1"));
}

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();
    let (status, result) = send(
        router,
        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("Content-Type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_trips_array() {
    let router = create_router_for_test();
    let (status, result) = post_evaluate(router, json!({ "reference_date": "2024-01-01" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_invalid_date() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2024-02-30", "2024-03-01")], "2024-01-01");

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_trip_too_long() {
    let router = create_router_for_test();
    let request = create_request(vec![create_trip("2000-01-01", "2020-01-01")], "2024-01-01");

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "TRIP_TOO_LONG");
}

#[tokio::test]
async fn test_error_too_many_trips() {
    let router = create_router_for_test();
    let trips: Vec<Value> = (0..501)
        .map(|_| create_trip("2024-01-01", "2024-01-01"))
        .collect();

    let (status, result) = post_evaluate(router, create_request(trips, "2024-01-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "TOO_MANY_TRIPS");
}

#[tokio::test]
async fn test_error_trips_span_too_wide() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_trip("0001-01-01", "0001-01-01"),
            create_trip("9999-12-31", "9999-12-31"),
        ],
        "2024-01-01",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "SPAN_TOO_WIDE");
    assert!(result["message"].as_str().unwrap().contains("36600"));
}

#[tokio::test]
async fn test_error_trip_at_calendar_limit() {
    let router = create_router_for_test();
    // The unlock date of a trip ending on the last representable day overflows
    let request = create_request(
        vec![create_trip("+262142-12-31", "+262142-12-31")],
        "2024-01-01",
    );

    let (status, result) = post_evaluate(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(result["code"], "CALCULATION_ERROR");
}
