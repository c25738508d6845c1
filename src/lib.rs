// ABOUTME: Main library entry point for the Diet-To-Discipline nutrition service
// ABOUTME: Target calculation, profile persistence, hydration tracking, and the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet-To-Discipline
//!
//! Turns a user's biometric profile into daily calorie, BMI, and
//! macronutrient targets, stores them per user, and serves them over HTTP.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure calculators (targets, insights, hydration)
//! - **Config**: environment-driven server settings and nutrition constants
//! - **Database**: SQLite storage for profiles and hydration logs
//! - **Routes**: axum handlers and router assembly
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diet_to_discipline::config::NutritionConfig;
//! use diet_to_discipline::intelligence::compute_targets;
//! use diet_core::models::{Gender, Goal, Profile};
//!
//! let profile = Profile {
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     age: 30,
//!     gender: Gender::Male,
//!     activity_factor: 1.2,
//!     goal: Goal::Maintain,
//! };
//! let targets = compute_targets(&profile, &NutritionConfig::default())?;
//! println!("{} kcal/day", targets.daily_calories);
//! # Ok::<(), diet_core::errors::InvalidProfileError>(())
//! ```

/// Environment and nutrition configuration
pub mod config;

/// Application constants
pub mod constants;

/// SQLite persistence
pub mod database;

/// Target, insight, and hydration calculators
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// CORS and request correlation middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Error types shared with `diet-core`
pub mod errors {
    pub use diet_core::errors::*;
}

/// Data models shared with `diet-core`
pub mod models {
    pub use diet_core::models::*;
}
