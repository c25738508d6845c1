// ABOUTME: Test application builders and sample profiles
// ABOUTME: Creates routers backed by a fresh in-memory SQLite database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::Router;
use diet_to_discipline::{
    config::ServerConfig,
    database::Database,
    models::{Gender, Goal, Profile},
    routes::{router, ServerResources},
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Resources backed by a fresh in-memory database
pub async fn create_test_resources(config: ServerConfig) -> Arc<ServerResources> {
    let database = Database::new(&config.database.url)
        .await
        .expect("Failed to create test database");
    ServerResources::new(database, config)
}

/// Full application router with test configuration
pub async fn create_test_app() -> Router {
    router(create_test_resources(ServerConfig::for_testing()).await)
}

/// 70 kg, 175 cm, 30 y male, sedentary, maintain
pub const fn male_profile() -> Profile {
    Profile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_factor: 1.2,
        goal: Goal::Maintain,
    }
}

/// 60 kg, 160 cm, 25 y female, lightly active, lose
pub const fn female_profile() -> Profile {
    Profile {
        weight_kg: 60.0,
        height_cm: 160.0,
        age: 25,
        gender: Gender::Female,
        activity_factor: 1.375,
        goal: Goal::Lose,
    }
}

/// Request body for the male profile as a web form would send it
pub fn male_request_body(email: &str) -> Value {
    json!({
        "name": "Alex",
        "email": email,
        "weight": "70",
        "height": "175",
        "age": "30",
        "gender": "male",
        "activity": "1.2",
        "goal": "maintain"
    })
}
