// ABOUTME: Nutrition configuration for the target calculator
// ABOUTME: Configures BMR coefficients, goal offsets, activity tiers, energy density, and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! Every constant the target calculator uses lives here, so the calculator
//! itself is one pure function parameterized by a [`NutritionConfig`].
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when checking that split fractions sum to one
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers offered to clients
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie offsets per goal
    pub goal_offsets: GoalOffsetsConfig,
    /// Caloric density of each macronutrient
    pub energy_density: EnergyDensityConfig,
    /// Macronutrient split applied to daily calories
    pub macro_split: MacroSplit,
}

impl NutritionConfig {
    /// Default configuration using the given macro split preset
    #[must_use]
    pub fn with_preset(preset: MacroSplitPreset) -> Self {
        Self {
            macro_split: preset.split(),
            ..Self::default()
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a macro split does not sum to 100% or a
    /// caloric density is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.macro_split.validate()?;
        self.energy_density.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// The calculator accepts any factor; these tiers are what clients offer.
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (office job): 1.2
    pub sedentary: f64,
    /// Light exercise (1-2 days/week): 1.375
    pub lightly_active: f64,
    /// Moderate exercise (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Heavy exercise (6-7 days/week): 1.725
    pub very_active: f64,
    /// Athlete (training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Daily calorie offsets applied to TDEE per goal (kcal/day)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalOffsetsConfig {
    /// Weight loss deficit: -500
    pub lose: i64,
    /// Maintenance: 0
    pub maintain: i64,
    /// Weight gain surplus: +500
    pub gain: i64,
}

impl Default for GoalOffsetsConfig {
    fn default() -> Self {
        Self {
            lose: -500,
            maintain: 0,
            gain: 500,
        }
    }
}

/// Caloric density per gram of each macronutrient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyDensityConfig {
    /// Carbohydrate: 4 kcal/g
    pub carbs_kcal_per_g: f64,
    /// Protein: 4 kcal/g
    pub protein_kcal_per_g: f64,
    /// Fat: 9 kcal/g
    pub fat_kcal_per_g: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            carbs_kcal_per_g: 4.0,
            protein_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
        }
    }
}

impl EnergyDensityConfig {
    /// Validate that every density is positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a density is zero, negative, or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let densities = [
            ("carbs_kcal_per_g", self.carbs_kcal_per_g),
            ("protein_kcal_per_g", self.protein_kcal_per_g),
            ("fat_kcal_per_g", self.fat_kcal_per_g),
        ];
        for (name, value) in densities {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Macronutrient split as fractions of daily calories
///
/// Fractions must each lie in 0.0-1.0 and sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Carbohydrate fraction
    pub carbs: f64,
    /// Protein fraction
    pub protein: f64,
    /// Fat fraction
    pub fat: f64,
}

impl MacroSplit {
    /// 40% carbs, 30% protein, 30% fat
    pub const STANDARD: Self = Self {
        carbs: 0.4,
        protein: 0.3,
        fat: 0.3,
    };

    /// 35% carbs, 30% protein, 35% fat
    pub const LOWER_CARB: Self = Self {
        carbs: 0.35,
        protein: 0.3,
        fat: 0.35,
    };

    /// Validate that the fractions are in range and sum to one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if a fraction is outside 0.0-1.0
    /// or the three do not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} fraction must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = self.carbs + self.protein + self.fat;
        if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "macro split must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Named macro split presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroSplitPreset {
    /// 40/30/30 carbs/protein/fat
    #[default]
    Standard,
    /// 35/30/35 carbs/protein/fat
    LowerCarb,
}

impl MacroSplitPreset {
    /// Fractions for this preset
    #[must_use]
    pub const fn split(self) -> MacroSplit {
        match self {
            Self::Standard => MacroSplit::STANDARD,
            Self::LowerCarb => MacroSplit::LOWER_CARB,
        }
    }

    /// Configuration name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LowerCarb => "lower_carb",
        }
    }
}

impl FromStr for MacroSplitPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "standard" | "a" | "40_30_30" => Ok(Self::Standard),
            "lower_carb" | "b" | "35_30_35" => Ok(Self::LowerCarb),
            other => Err(ConfigError::Parse(format!(
                "unknown macro split preset '{other}' (expected 'standard' or 'lower_carb')"
            ))),
        }
    }
}

impl fmt::Display for MacroSplitPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
