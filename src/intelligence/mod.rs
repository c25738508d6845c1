// ABOUTME: Intelligence module for nutrition targets and derived dashboard figures
// ABOUTME: Pure computations with no I/O, shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure computations over a user's biometric profile.

/// Daily water intake tracking
pub mod hydration;
/// BMI category, target weight, and meal-plan calorie window
pub mod insights;
/// Mifflin-St Jeor BMR, TDEE, BMI, and macro targets
pub mod nutrition_calculator;

pub use hydration::HydrationTracker;
pub use insights::{derive_insights, BmiCategory, CalorieRange, ProfileInsights};
pub use nutrition_calculator::{compute_targets, validate_profile, ActivityLevel};
