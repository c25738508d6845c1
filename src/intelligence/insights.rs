// ABOUTME: Dashboard insights derived from a profile and its computed targets
// ABOUTME: BMI category, goal target weight, and the calorie window used for meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::models::{Goal, Profile, Targets};
use serde::{Deserialize, Serialize};

/// BMI below this is underweight
const UNDERWEIGHT_BMI_LIMIT: f64 = 18.5;
/// BMI at or above this is overweight
const OVERWEIGHT_BMI_LIMIT: f64 = 25.0;
/// Weight change suggested for lose/gain goals (kg)
const GOAL_WEIGHT_DELTA_KG: f64 = 5.0;
/// Half-width of the calorie window sent to meal planners (kcal)
const MEAL_PLAN_CALORIE_TOLERANCE: i64 = 150;

/// Coarse BMI classification shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// BMI >= 25
    Overweight,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BMI_LIMIT {
            Self::Underweight
        } else if bmi < OVERWEIGHT_BMI_LIMIT {
            Self::Normal
        } else {
            Self::Overweight
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
        }
    }
}

/// Inclusive calorie range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieRange {
    /// Lower bound (kcal)
    pub min: i64,
    /// Upper bound (kcal)
    pub max: i64,
}

/// Secondary figures derived from a profile and its targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInsights {
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Weight the user is working toward (kg)
    pub target_weight_kg: f64,
    /// Calorie window for a one-day meal plan
    pub meal_plan_calories: CalorieRange,
}

/// Derive dashboard insights
#[must_use]
pub fn derive_insights(profile: &Profile, targets: &Targets) -> ProfileInsights {
    let target_weight_kg = match profile.goal {
        Goal::Lose => profile.weight_kg - GOAL_WEIGHT_DELTA_KG,
        Goal::Gain => profile.weight_kg + GOAL_WEIGHT_DELTA_KG,
        Goal::Maintain => profile.weight_kg,
    };

    ProfileInsights {
        bmi_category: BmiCategory::from_bmi(targets.bmi),
        target_weight_kg,
        meal_plan_calories: CalorieRange {
            min: targets
                .daily_calories
                .saturating_sub(MEAL_PLAN_CALORIE_TOLERANCE),
            max: targets
                .daily_calories
                .saturating_add(MEAL_PLAN_CALORIE_TOLERANCE),
        },
    }
}
