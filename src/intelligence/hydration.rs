// ABOUTME: Daily water intake counter bounded by a glasses-per-day goal
// ABOUTME: Saturating add/remove semantics used by the hydration endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Glasses of water logged for one day
///
/// The count never leaves `0..=daily_goal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HydrationTracker {
    glasses: u32,
    daily_goal: u32,
}

impl HydrationTracker {
    /// Start a tracker, clamping `glasses` into range
    #[must_use]
    pub fn new(glasses: u32, daily_goal: u32) -> Self {
        Self {
            glasses: glasses.min(daily_goal),
            daily_goal,
        }
    }

    /// Glasses logged
    #[must_use]
    pub const fn glasses(&self) -> u32 {
        self.glasses
    }

    /// Goal for the day
    #[must_use]
    pub const fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Log one glass, saturating at the goal
    pub fn add_glass(&mut self) {
        self.apply(1);
    }

    /// Remove one glass, saturating at zero
    pub fn remove_glass(&mut self) {
        self.apply(-1);
    }

    /// Apply a signed change, saturating at both bounds
    pub fn apply(&mut self, delta: i64) {
        let next = i64::from(self.glasses).saturating_add(delta);
        self.glasses = next.clamp(0, i64::from(self.daily_goal)) as u32;
    }

    /// Fraction of the goal reached (0.0-1.0)
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.daily_goal == 0 {
            return 1.0;
        }
        f64::from(self.glasses) / f64::from(self.daily_goal)
    }

    /// Whether the goal has been met
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.glasses >= self.daily_goal
    }
}
