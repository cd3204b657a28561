//! Integration tests for the unit converter.
//!
//! This test suite covers:
//! - The engine's conversion matrix for all three categories
//! - Identity short-circuit behavior, including unrecognized tokens
//! - Closed-world lookup failures
//! - The HTTP API: conversions, defaults, the unit catalog, error payloads

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use unit_converter::api::{AppState, create_router};
use unit_converter::conversion::convert;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::default())
}

async fn post_convert(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_converts(category: &str, from: &str, to: &str, value: f64, expected: f64) {
    let actual = convert(category, from, to, value)
        .unwrap_or_else(|e| panic!("{category} {from}->{to} failed: {e}"));
    assert_eq!(
        actual, expected,
        "{category}: expected {value} {from} = {expected} {to}, got {actual}"
    );
}

fn assert_unsupported(category: &str, from: &str, to: &str) {
    let err = convert(category, from, to, 1.0)
        .expect_err(&format!("{category} {from}->{to} should be unsupported"));
    let message = err.to_string();
    assert!(message.contains(&format!("'{from}'")), "message: {message}");
    assert!(message.contains(&format!("'{to}'")), "message: {message}");
}

// =============================================================================
// Engine: temperature
// =============================================================================

#[test]
fn test_temperature_conversions() {
    assert_converts("temperature", "celsius", "fahrenheit", 0.0, 32.0);
    assert_converts("temperature", "celsius", "fahrenheit", 100.0, 212.0);
    assert_converts("temperature", "fahrenheit", "celsius", 32.0, 0.0);
    assert_converts("temperature", "celsius", "kelvin", 0.0, 273.15);
    assert_converts("temperature", "kelvin", "celsius", 273.15, 0.0);
    assert_converts("temperature", "fahrenheit", "kelvin", -459.67, 0.0);
    assert_converts("temperature", "kelvin", "fahrenheit", 0.0, -459.67);
}

#[test]
fn test_temperature_negative_values() {
    assert_converts("temperature", "celsius", "fahrenheit", -40.0, -40.0);
    assert_converts("temperature", "fahrenheit", "celsius", -40.0, -40.0);
    assert_converts("temperature", "kelvin", "celsius", 0.0, -273.15);
}

#[test]
fn test_temperature_unknown_tokens() {
    assert_unsupported("invalid", "celsius", "fahrenheit");
    assert_unsupported("temperature", "invalid", "fahrenheit");
    assert_unsupported("temperature", "celsius", "invalid");
}

// =============================================================================
// Engine: length
// =============================================================================

#[test]
fn test_length_conversions() {
    assert_converts("length", "meters", "feet", 100.0, 328.08);
    assert_converts("length", "feet", "meters", 328.08, 100.0);
    assert_converts("length", "meters", "kilometers", 100.0, 0.1);
    assert_converts("length", "kilometers", "meters", 0.1, 100.0);
    assert_converts("length", "kilometers", "feet", 0.1, 328.08);
    assert_converts("length", "feet", "kilometers", 328.08, 0.1);
    assert_converts("length", "kilometers", "miles", 100.0, 62.14);
    assert_converts("length", "miles", "kilometers", 62.14, 100.0);
    assert_converts("length", "miles", "feet", 1.0, 5280.0);
    assert_converts("length", "feet", "miles", 5280.0, 1.0);
    assert_converts("length", "yards", "feet", 3.0, 9.0);
    assert_converts("length", "feet", "yards", 9.0, 3.0);
    assert_converts("length", "miles", "yards", 1.0, 1760.0);
}

#[test]
fn test_length_unknown_tokens() {
    assert_unsupported("invalid", "meters", "feet");
    assert_unsupported("length", "invalid", "feet");
    assert_unsupported("length", "meters", "invalid");
}

// =============================================================================
// Engine: weight
// =============================================================================

#[test]
fn test_weight_conversions() {
    assert_converts("weight", "grams", "ounces", 100.0, 3.53);
    assert_converts("weight", "ounces", "grams", 100.0, 2834.95);
    assert_converts("weight", "grams", "pounds", 1000.0, 2.2);
    assert_converts("weight", "pounds", "grams", 10.0, 4535.92);
    assert_converts("weight", "pounds", "ounces", 1.0, 16.0);
    assert_converts("weight", "ounces", "pounds", 16.0, 1.0);
    assert_converts("weight", "grams", "kilograms", 10000.0, 10.0);
    assert_converts("weight", "kilograms", "grams", 1.0, 1000.0);
    assert_converts("weight", "grams", "milligrams", 1.0, 1000.0);
    assert_converts("weight", "milligrams", "kilograms", 10000.0, 0.01);
    assert_converts("weight", "kilograms", "milligrams", 0.1, 100000.0);
    assert_converts("weight", "milligrams", "ounces", 100000.0, 3.53);
    assert_converts("weight", "ounces", "milligrams", 10.0, 283495.2);
    assert_converts("weight", "milligrams", "pounds", 100000.0, 0.22);
    assert_converts("weight", "pounds", "milligrams", 0.6, 272155.44);
}

#[test]
fn test_weight_sub_hundredth_results_round_to_zero() {
    assert_converts("weight", "milligrams", "grams", 1.0, 0.0);
}

#[test]
fn test_weight_unknown_tokens() {
    assert_unsupported("invalid", "pounds", "grams");
    assert_unsupported("weight", "invalid", "grams");
    assert_unsupported("weight", "pounds", "invalid");
}

// =============================================================================
// Engine: identity and cross-category behavior
// =============================================================================

#[test]
fn test_identity_returns_input_unchanged() {
    assert_converts("temperature", "celsius", "celsius", 42.0, 42.0);
    // Identity results are not rounded
    assert_converts("length", "miles", "miles", 1.23456, 1.23456);
}

#[test]
fn test_identity_bypass_for_unknown_tokens() {
    // Equal tokens short-circuit before any validation
    assert_converts("invalid", "bogus", "bogus", 19.5, 19.5);
    assert_converts("temperature", "unheard-of", "unheard-of", -3.0, -3.0);
}

#[test]
fn test_units_from_another_category_are_unsupported() {
    assert_unsupported("temperature", "meters", "feet");
    assert_unsupported("length", "grams", "ounces");
    assert_unsupported("weight", "celsius", "kelvin");
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_converts_and_echoes_request() {
    let (status, body) = post_convert(
        create_router_for_test(),
        json!({
            "category": "length",
            "from": "meters",
            "to": "feet",
            "value": 100
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 328.08);
    assert_eq!(body["category"], "length");
    assert_eq!(body["from"], "meters");
    assert_eq!(body["to"], "feet");
    assert_eq!(body["value"], 100.0);
}

#[tokio::test]
async fn test_api_applies_temperature_defaults() {
    let (status, body) = post_convert(
        create_router_for_test(),
        json!({"category": "temperature", "value": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "celsius");
    assert_eq!(body["to"], "fahrenheit");
    assert_eq!(body["result"], 32.0);
}

#[tokio::test]
async fn test_api_fills_one_missing_side() {
    let (status, body) = post_convert(
        create_router_for_test(),
        json!({"category": "length", "to": "miles", "value": 1609.34}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "meters");
    assert_eq!(body["to"], "miles");
    assert_eq!(body["result"], 1.0);
}

#[tokio::test]
async fn test_api_unsupported_conversion_payload() {
    let (status, body) = post_convert(
        create_router_for_test(),
        json!({
            "category": "weight",
            "from": "invalid",
            "to": "grams",
            "value": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_CONVERSION");
    assert_eq!(
        body["message"],
        "conversion from 'invalid' to 'grams' is not supported"
    );
}

#[tokio::test]
async fn test_api_unknown_category_without_units_is_validation_error() {
    let (status, body) = post_convert(
        create_router_for_test(),
        json!({"category": "volume", "value": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from("not json at all"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_units_catalog_matches_engine() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/units")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let listing: Value = serde_json::from_slice(&body).unwrap();
    let categories: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["category"].as_str().unwrap())
        .collect();

    assert_eq!(categories, ["temperature", "length", "weight"]);

    // Every advertised default pair must convert successfully.
    for entry in listing.as_array().unwrap() {
        let category = entry["category"].as_str().unwrap();
        let from = entry["default_from"].as_str().unwrap();
        let to = entry["default_to"].as_str().unwrap();
        assert!(convert(category, from, to, 1.0).is_ok());
    }
}
