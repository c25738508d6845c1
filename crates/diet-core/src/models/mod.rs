// ABOUTME: Core data models for the nutrition service
// ABOUTME: Re-exports profile, targets, and persisted user record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod profile;
mod targets;

pub use profile::{Gender, Goal, Profile};
pub use targets::{MacroTargets, Targets};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's stored profile with the targets computed from it
///
/// Keyed by `email`; a repeat submission overwrites `metrics` and `targets`
/// and keeps `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Unique key
    pub email: String,
    /// Submitted profile
    pub metrics: Profile,
    /// Targets computed from `metrics`
    pub targets: Targets,
    /// First submission time
    pub created_at: DateTime<Utc>,
    /// Last submission time
    pub updated_at: DateTime<Utc>,
}
