// ABOUTME: Hydration log database operations
// ABOUTME: One glasses count per user per UTC calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use chrono::{NaiveDate, Utc};
use diet_core::errors::{AppError, AppResult};
use sqlx::Row;

impl Database {
    /// Glasses logged by `email` on `date`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_hydration(&self, email: &str, date: NaiveDate) -> AppResult<Option<u32>> {
        let row = sqlx::query(
            r"
            SELECT glasses FROM hydration_logs
            WHERE email = ?1 AND log_date = ?2
            ",
        )
        .bind(email)
        .bind(date.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get hydration log: {e}")))?;

        Ok(row.map(|row| {
            let glasses: i64 = row.get("glasses");
            u32::try_from(glasses).unwrap_or(0)
        }))
    }

    /// Add `delta` glasses to the count for `email` on `date` and return the new count
    ///
    /// The change is applied in a single statement and the stored count is
    /// clamped to `0..=daily_goal`, so concurrent updates never lose a glass.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn apply_hydration_delta(
        &self,
        email: &str,
        date: NaiveDate,
        delta: i64,
        daily_goal: u32,
    ) -> AppResult<u32> {
        let goal = i64::from(daily_goal);
        // Anything past the goal saturates anyway; keeps the SQL sum in range
        let delta = delta.clamp(-goal, goal);

        let row = sqlx::query(
            r"
            INSERT INTO hydration_logs (email, log_date, glasses, updated_at)
            VALUES (?1, ?2, MAX(0, MIN(?4, ?3)), ?5)
            ON CONFLICT(email, log_date) DO UPDATE SET
                glasses = MAX(0, MIN(?4, glasses + ?3)),
                updated_at = ?5
            RETURNING glasses
            ",
        )
        .bind(email)
        .bind(date.to_string())
        .bind(delta)
        .bind(goal)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update hydration log: {e}")))?;

        let glasses: i64 = row.get("glasses");
        Ok(u32::try_from(glasses).unwrap_or(0))
    }
}
