//! End-to-end API tests driven through the router with `tower::oneshot`.
//!
//! No network or running server required.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use sample_service::api::{create_router, AppState};
use sample_service::config::Config;

fn app() -> Router {
    create_router(AppState::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_calculate(app: Router, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn calculate(body: Value) -> (StatusCode, Value) {
    post_calculate(app(), Body::from(body.to_string())).await
}

#[tokio::test]
async fn home_returns_greeting_with_version_and_environment() {
    let (status, body) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], "development");
    assert!(body["message"].as_str().unwrap().starts_with("Hello"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn home_reports_configured_environment() {
    let config = Config {
        environment: "staging".to_string(),
        ..Config::default()
    };
    let router = create_router(AppState::new(config));

    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["environment"], "staging");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn users_returns_three_records_in_fixed_order() {
    let (status, body) = get(app(), "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["name"], "John Doe");
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[1]["email"], "jane@example.com");
    assert_eq!(users[2]["name"], "Bob Johnson");
}

#[tokio::test]
async fn unknown_route_returns_404_error_body() {
    let (status, body) = get(app(), "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn unknown_route_any_method_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/users/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calculate_scenarios_produce_expected_results() {
    let scenarios = [
        (json!({"a": 5, "b": 3, "operation": "add"}), 8.0),
        (json!({"a": 10, "b": 4, "operation": "subtract"}), 6.0),
        (json!({"a": 6, "b": 7, "operation": "multiply"}), 42.0),
        (json!({"a": 15, "b": 3, "operation": "divide"}), 5.0),
        (json!({"a": 2, "b": 3, "operation": "power"}), 8.0),
    ];

    for (request, expected) in scenarios {
        let (status, body) = calculate(request.clone()).await;
        assert_eq!(status, StatusCode::OK, "scenario {request}");
        assert_eq!(body["result"].as_f64().unwrap(), expected, "scenario {request}");
        assert!(body["operation"].is_string());
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn calculate_includes_readable_expression() {
    let (status, body) = calculate(json!({"a": 5, "b": 3, "operation": "add"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "5 add 3 = 8");
}

#[tokio::test]
async fn divide_by_zero_returns_400_for_any_dividend() {
    for a in [10, 0, -3] {
        let (status, body) = calculate(json!({"a": a, "b": 0, "operation": "divide"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Cannot divide by zero");
    }
}

#[tokio::test]
async fn missing_parameters_return_400() {
    let cases = [
        json!({"b": 3, "operation": "add"}),
        json!({"a": 5, "operation": "add"}),
        json!({"a": 5, "b": 3}),
        json!({"a": 5, "b": 3, "operation": ""}),
    ];

    for case in cases {
        let (status, body) = calculate(case.clone()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("Missing required parameters"),
            "case {case}"
        );
    }
}

#[tokio::test]
async fn non_numeric_operands_return_400() {
    let cases = [
        json!({"a": "abc", "b": 3, "operation": "add"}),
        json!({"a": 5, "b": [1], "operation": "add"}),
        json!({"a": true, "b": 3, "operation": "add"}),
    ];

    for case in cases {
        let (status, body) = calculate(case.clone()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
        assert!(
            body["error"].as_str().unwrap().contains("must be numbers"),
            "case {case}"
        );
    }
}

#[tokio::test]
async fn string_operands_are_coerced() {
    let (status, body) = calculate(json!({"a": "15", "b": "3", "operation": "divide"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64().unwrap(), 5.0);
}

#[tokio::test]
async fn unknown_operation_returns_400() {
    let (status, body) = calculate(json!({"a": 5, "b": 3, "operation": "modulo"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid operation"));
}

#[tokio::test]
async fn operation_match_is_case_sensitive() {
    let (status, body) = calculate(json!({"a": 5, "b": 3, "operation": "Add"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid operation"));
}

#[tokio::test]
async fn empty_body_returns_400_no_json_data() {
    let (status, body) = post_calculate(app(), Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn malformed_json_returns_400_no_json_data() {
    let (status, body) = post_calculate(app(), Body::from("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn empty_object_returns_400_no_json_data() {
    let (status, body) = calculate(json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}
