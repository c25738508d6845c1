// ABOUTME: Nutrition targets produced from a biometric profile
// ABOUTME: Targets and MacroTargets definitions serialized in camelCase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Carbohydrates (grams)
    pub carbs_grams: i64,
    /// Protein (grams)
    pub protein_grams: i64,
    /// Fats (grams)
    pub fats_grams: i64,
}

/// Calorie, BMI, and macro targets derived from a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    /// Basal Metabolic Rate (kcal/day), unrounded
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// TDEE adjusted by the goal offset (kcal/day)
    pub daily_calories: i64,
    /// Body Mass Index, one decimal place
    pub bmi: f64,
    /// Macronutrient split in grams
    pub macros: MacroTargets,
}
