// ABOUTME: Biometric profile model consumed by the nutrition target calculator
// ABOUTME: Gender, Goal, and Profile definitions with lenient categorical parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological gender used to select the Mifflin-St Jeor constant
///
/// Only `male` is special-cased; any other value lands in the female branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Parse gender from string, defaulting to `Female` for anything but "male"
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calorie goal relative to maintenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Parse goal from string; unrecognized values mean `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's physical profile
///
/// Values are well-typed but not yet range-checked; the calculator rejects
/// non-positive weight, height, or age.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Multiplier applied to BMR (1.2 sedentary .. 1.9 elite athlete)
    #[serde(alias = "activity")]
    pub activity_factor: f64,
    /// Calorie goal
    #[serde(default)]
    pub goal: Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_only_male_is_special_cased() {
        assert_eq!(Gender::from_str_lossy("male"), Gender::Male);
        assert_eq!(Gender::from_str_lossy(" MALE "), Gender::Male);
        assert_eq!(Gender::from_str_lossy("female"), Gender::Female);
        assert_eq!(Gender::from_str_lossy("mal"), Gender::Female);
    }

    #[test]
    fn test_unknown_goal_is_maintain() {
        assert_eq!(Goal::from_str_lossy("Lose"), Goal::Lose);
        assert_eq!(Goal::from_str_lossy("gain"), Goal::Gain);
        assert_eq!(Goal::from_str_lossy("sprint"), Goal::Maintain);
        assert_eq!(Goal::from_str_lossy(""), Goal::Maintain);
    }

    #[test]
    fn test_profile_json_shape() {
        let profile: Profile = serde_json::from_str(
            r#"{"weight":70,"height":175,"age":30,"gender":"male","activity":1.2,"goal":"sprint"}"#,
        )
        .unwrap();

        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.gender, Gender::Male);
        assert!((profile.activity_factor - 1.2).abs() < f64::EPSILON);

        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["activityFactor"], 1.2);
        assert_eq!(json["goal"], "maintain");
        assert_eq!(json["weight"], 70.0);
    }
}
