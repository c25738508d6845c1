// ABOUTME: Validation error raised when a biometric profile holds out-of-domain values
// ABOUTME: Names every offending field so callers can report them in one response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Profile field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    /// Body weight in kilograms
    Weight,
    /// Height in centimeters
    Height,
    /// Age in years
    Age,
    /// Biological gender
    Gender,
    /// Activity multiplier
    ActivityFactor,
    /// Calorie goal
    Goal,
}

impl ProfileField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::ActivityFactor => "activityFactor",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile contained values outside their valid domain
///
/// Raised synchronously by the target calculator before any arithmetic runs,
/// so no partial result ever exists alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid profile field(s): {}", join_fields(.fields))]
pub struct InvalidProfileError {
    fields: Vec<ProfileField>,
}

impl InvalidProfileError {
    /// Create an error naming the given fields (duplicates are dropped)
    #[must_use]
    pub fn new(fields: Vec<ProfileField>) -> Self {
        let mut unique = Vec::with_capacity(fields.len());
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self { fields: unique }
    }

    /// Create an error for a single field
    #[must_use]
    pub fn field(field: ProfileField) -> Self {
        Self::new(vec![field])
    }

    /// Fields that failed validation, in the order they were checked
    #[must_use]
    pub fn fields(&self) -> &[ProfileField] {
        &self.fields
    }

    /// Whether the given field is among the offending ones
    #[must_use]
    pub fn contains(&self, field: ProfileField) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
