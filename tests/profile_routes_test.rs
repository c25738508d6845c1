// ABOUTME: HTTP tests for the profile calculation, persistence, and lookup routes
// ABOUTME: Exercises 201/400/404 flows and upsert semantics against in-memory SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{create_test_app, male_request_body};
use serde_json::{json, Value};

#[tokio::test]
async fn test_calculate_and_save_returns_created_record() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&male_request_body("alex@example.com"))
        .send(app)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["email"], "alex@example.com");
    assert_eq!(data["name"], "Alex");
    assert_eq!(data["metrics"]["weight"], 70.0);
    assert_eq!(data["metrics"]["gender"], "male");
    assert_eq!(data["targets"]["bmr"], 1648.75);
    assert_eq!(data["targets"]["tdee"], 1979);
    assert_eq!(data["targets"]["dailyCalories"], 1979);
    assert_eq!(data["targets"]["bmi"], 22.9);
    assert_eq!(data["targets"]["macros"]["carbsGrams"], 198);
    assert_eq!(data["targets"]["macros"]["proteinGrams"], 148);
    assert_eq!(data["targets"]["macros"]["fatsGrams"], 66);
    assert!(data["createdAt"].is_string());
    assert_eq!(body["insights"]["bmiCategory"], "normal");
}

#[tokio::test]
async fn test_saved_profile_can_be_fetched() {
    let app = create_test_app().await;

    AxumTestRequest::post("/api/calculate-and-save")
        .json(&male_request_body("fetch@example.com"))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = AxumTestRequest::get("/api/profile/fetch@example.com")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["data"]["email"], "fetch@example.com");
    assert_eq!(body["data"]["targets"]["tdee"], 1979);
}

#[tokio::test]
async fn test_resubmission_overwrites_and_keeps_created_at() {
    let app = create_test_app().await;

    let first: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&male_request_body("repeat@example.com"))
        .send(app.clone())
        .await
        .json();

    let mut updated = male_request_body("repeat@example.com");
    updated["goal"] = json!("lose");
    updated["weight"] = json!(80);
    let second: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&updated)
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(second["data"]["metrics"]["weight"], 80.0);
    assert_eq!(second["data"]["metrics"]["goal"], "lose");
    assert_eq!(second["data"]["createdAt"], first["data"]["createdAt"]);
    assert_eq!(second["insights"]["targetWeightKg"], 75.0);

    let stored: Value = AxumTestRequest::get("/api/profile/repeat@example.com")
        .send(app)
        .await
        .json();
    assert_eq!(stored["data"]["metrics"]["weight"], 80.0);
}

#[tokio::test]
async fn test_missing_fields_are_listed() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&json!({ "name": "Sam", "weight": 70, "gender": "male" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(
        body["error"]["details"]["fields"],
        json!(["email", "height", "age", "activity"])
    );
    assert!(body["error"]["requestId"].is_string());
}

#[tokio::test]
async fn test_non_positive_weight_is_invalid_profile() {
    let app = create_test_app().await;
    let mut request = male_request_body("zero@example.com");
    request["weight"] = json!(0);

    let body: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&request)
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_PROFILE");
    assert_eq!(body["error"]["details"]["fields"], json!(["weight"]));

    // Nothing was stored
    AxumTestRequest::get("/api/profile/zero@example.com")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_profile_is_not_found() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::get("/api/profile/nobody@example.com")
        .header("x-request-id", "req_fixed")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["requestId"], "req_fixed");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/calculate-and-save")
        .raw_json("{not json")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_targets_preview_does_not_persist() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/targets")
        .json(&json!({
            "weight": 60, "height": 160, "age": 25,
            "gender": "Female", "activity": 1.375, "goal": "lose"
        }))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let data = &body["data"];
    assert_eq!(data["targets"]["bmr"], 1314.0);
    assert_eq!(data["targets"]["tdee"], 1807);
    assert_eq!(data["targets"]["dailyCalories"], 1307);
    assert_eq!(data["targets"]["bmi"], 23.4);
    assert_eq!(data["insights"]["mealPlanCalories"], json!({ "min": 1157, "max": 1457 }));
}

#[tokio::test]
async fn test_unknown_goal_is_treated_as_maintain() {
    let app = create_test_app().await;
    let mut request = male_request_body("sprint@example.com");
    request["goal"] = json!("sprint");

    let body: Value = AxumTestRequest::post("/api/calculate-and-save")
        .json(&request)
        .send(app)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(body["data"]["metrics"]["goal"], "maintain");
    assert_eq!(body["data"]["targets"]["dailyCalories"], 1979);
}

#[tokio::test]
async fn test_responses_carry_request_id_header() {
    let app = create_test_app().await;

    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 200);
    assert!(response
        .header("x-request-id")
        .is_some_and(|id| id.starts_with("req_")));
}

#[tokio::test]
async fn test_unrepresentable_weight_is_invalid_profile() {
    let app = create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/targets")
        .json(&json!({
            "weight": "1e300", "height": "175", "age": "30",
            "gender": "male", "activity": "1.2", "goal": "gain"
        }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_PROFILE");
    assert_eq!(body["error"]["details"]["fields"], json!(["weight"]));
}

#[tokio::test]
async fn test_email_is_trimmed_on_save_and_lookup() {
    let app = create_test_app().await;

    AxumTestRequest::post("/api/calculate-and-save")
        .json(&male_request_body("  padded@example.com "))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);

    for uri in [
        "/api/profile/padded@example.com",
        "/api/profile/%20padded@example.com%20",
    ] {
        let body: Value = AxumTestRequest::get(uri)
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();
        assert_eq!(body["data"]["email"], "padded@example.com");
    }
}
