// ABOUTME: Nutrition target calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted calories, BMI, and fixed-split macronutrient targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Calculator
//!
//! Turns a biometric [`Profile`] into calorie, BMI, and macro [`Targets`].
//! The computation is a pure, total function of a valid profile and a
//! [`NutritionConfig`]: no I/O, no shared state, and identical output for
//! identical input.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalOffsetsConfig, MacroSplit,
    NutritionConfig,
};
use diet_core::errors::{InvalidProfileError, ProfileField};
use diet_core::models::{Gender, Goal, MacroTargets, Profile, Targets};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Activity tier offered to users when picking an activity factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (office job)
    Sedentary,
    /// Light exercise (1-2 days/week)
    LightlyActive,
    /// Moderate exercise (3-5 days/week)
    ModeratelyActive,
    /// Heavy exercise (6-7 days/week)
    VeryActive,
    /// Athlete (training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier for this tier
    #[must_use]
    pub fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::LightlyActive => config.lightly_active,
            Self::ModeratelyActive => config.moderately_active,
            Self::VeryActive => config.very_active,
            Self::ExtraActive => config.extra_active,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::LightlyActive),
            "moderate" | "moderately_active" => Ok(Self::ModeratelyActive),
            "heavy" | "very_active" => Ok(Self::VeryActive),
            "athlete" | "extra_active" => Ok(Self::ExtraActive),
            other => Err(format!("unknown activity level '{other}'")),
        }
    }
}

/// Check that weight, height, and age are positive
///
/// Non-finite weight or height is rejected too. Every offending field is
/// reported, in declaration order.
///
/// # Errors
///
/// Returns `InvalidProfileError` naming each field that is not positive
pub fn validate_profile(profile: &Profile) -> Result<(), InvalidProfileError> {
    let mut invalid = Vec::new();

    if !is_positive(profile.weight_kg) {
        invalid.push(ProfileField::Weight);
    }
    if !is_positive(profile.height_cm) {
        invalid.push(ProfileField::Height);
    }
    if profile.age == 0 {
        invalid.push(ProfileField::Age);
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(InvalidProfileError::new(invalid))
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Largest magnitude (kcal) an energy figure may reach and still be an exact integer
const MAX_ENERGY_KCAL: f64 = 9_007_199_254_740_991.0;

fn is_energy_in_range(kcal: f64) -> bool {
    kcal.is_finite() && kcal.abs() <= MAX_ENERGY_KCAL
}

/// Fields whose BMR term alone leaves the energy range, or both if only their sum does
fn oversized_bmr_fields(profile: &Profile, config: &BmrConfig) -> Vec<ProfileField> {
    let mut fields = Vec::new();
    if !is_energy_in_range(config.msj_weight_coef * profile.weight_kg) {
        fields.push(ProfileField::Weight);
    }
    if !is_energy_in_range(config.msj_height_coef * profile.height_cm) {
        fields.push(ProfileField::Height);
    }
    if fields.is_empty() {
        fields.extend([ProfileField::Weight, ProfileField::Height]);
    }
    fields
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is left unrounded; no floor or ceiling is applied.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// The factor is used as given.
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> i64 {
    round_half_up(bmr * activity_factor) as i64
}

/// Daily calorie offset for a goal
#[must_use]
pub const fn goal_offset(goal: Goal, config: &GoalOffsetsConfig) -> i64 {
    match goal {
        Goal::Lose => config.lose,
        Goal::Maintain => config.maintain,
        Goal::Gain => config.gain,
    }
}

/// Calculate Body Mass Index rounded to one decimal place
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_tenths(weight_kg / height_m.powi(2))
}

/// Convert daily calories into gram targets for a fixed split
///
/// Each value is `round((daily_calories x fraction) / kcal_per_gram)`,
/// rounded independently, so the grams converted back to calories only
/// approximate `daily_calories`.
#[must_use]
pub fn calculate_macros(
    daily_calories: i64,
    split: &MacroSplit,
    density: &EnergyDensityConfig,
) -> MacroTargets {
    let calories = daily_calories as f64;
    let grams = |fraction: f64, kcal_per_g: f64| {
        round_half_up((calories * fraction) / kcal_per_g) as i64
    };

    MacroTargets {
        carbs_grams: grams(split.carbs, density.carbs_kcal_per_g),
        protein_grams: grams(split.protein, density.protein_kcal_per_g),
        fats_grams: grams(split.fat, density.fat_kcal_per_g),
    }
}

/// Compute calorie, BMI, and macro targets for a profile
///
/// This is the main entry point combining BMR, TDEE, goal offset, BMI, and
/// macro split.
///
/// # Errors
///
/// Returns `InvalidProfileError` if weight, height, or age is not positive,
/// or if an energy figure cannot be represented as an exact whole number of
/// kcal (a BMR blamed on weight or height, a TDEE or daily total blamed on
/// the activity factor). The activity factor is otherwise used as given.
pub fn compute_targets(
    profile: &Profile,
    config: &NutritionConfig,
) -> Result<Targets, InvalidProfileError> {
    validate_profile(profile)?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    if !is_energy_in_range(bmr) {
        return Err(InvalidProfileError::new(oversized_bmr_fields(
            profile,
            &config.bmr,
        )));
    }

    let out_of_range = || InvalidProfileError::new(vec![ProfileField::ActivityFactor]);
    if !is_energy_in_range(bmr * profile.activity_factor) {
        return Err(out_of_range());
    }
    let tdee = calculate_tdee(bmr, profile.activity_factor);
    let daily_calories = tdee
        .checked_add(goal_offset(profile.goal, &config.goal_offsets))
        .filter(|kcal| is_energy_in_range(*kcal as f64))
        .ok_or_else(out_of_range)?;

    Ok(Targets {
        bmr,
        tdee,
        daily_calories,
        bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
        macros: calculate_macros(daily_calories, &config.macro_split, &config.energy_density),
    })
}

/// Round to the nearest integer, ties toward positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal using the exact decimal value of `value`
///
/// Exact ties (x.x5 representable in binary, i.e. x.25 and x.75) go to the
/// larger neighbour; everything else uses the correctly rounded decimal.
fn round_to_tenths(value: f64) -> f64 {
    let quarters = value * 4.0;
    let is_exact_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_exact_tie {
        return (value * 10.0).ceil() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight_kg: f64, height_cm: f64, age: u32) -> Profile {
        Profile {
            weight_kg,
            height_cm,
            age,
            gender: Gender::Male,
            activity_factor: 1.2,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_round_half_up_matches_ties_toward_positive() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_half_up(2008.5) - 2009.0).abs() < f64::EPSILON);
        assert!((round_half_up(1896.125) - 1896.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_tenths_breaks_exact_ties_upward() {
        assert!((round_to_tenths(22.25) - 22.3).abs() < f64::EPSILON);
        assert!((round_to_tenths(22.75) - 22.8).abs() < f64::EPSILON);
        // 1.45 is stored slightly below 1.45, so it is not a tie
        assert!((round_to_tenths(1.45) - 1.4).abs() < f64::EPSILON);
        assert!((round_to_tenths(22.857_142) - 22.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_reports_every_bad_field() {
        let error = validate_profile(&profile(0.0, -1.0, 0)).unwrap_err();
        assert_eq!(
            error.fields(),
            &[ProfileField::Weight, ProfileField::Height, ProfileField::Age]
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let error = validate_profile(&profile(f64::NAN, f64::INFINITY, 30)).unwrap_err();
        assert!(error.contains(ProfileField::Weight));
        assert!(error.contains(ProfileField::Height));
        assert!(!error.contains(ProfileField::Age));
    }

    #[test]
    fn test_energy_range_check() {
        assert!(is_energy_in_range(-MAX_ENERGY_KCAL));
        assert!(!is_energy_in_range(MAX_ENERGY_KCAL * 2.0));
        assert!(!is_energy_in_range(f64::NAN));

        let config = BmrConfig::default();
        let huge_height = Profile {
            height_cm: 1e300,
            ..profile(70.0, 175.0, 30)
        };
        assert_eq!(
            oversized_bmr_fields(&huge_height, &config),
            vec![ProfileField::Height]
        );
    }

    #[test]
    fn test_activity_level_parsing() {
        let config = ActivityFactorsConfig::default();
        let level: ActivityLevel = "lightly-active".parse().unwrap();
        assert!((level.factor(&config) - 1.375).abs() < f64::EPSILON);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
