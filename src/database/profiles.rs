// ABOUTME: User profile database operations
// ABOUTME: Upsert keyed by email that preserves the original creation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use chrono::{DateTime, Utc};
use diet_core::errors::{AppError, AppResult};
use diet_core::models::{Profile, Targets, UserRecord};
use sqlx::Row;

impl Database {
    /// Insert or replace the profile stored for `email`
    ///
    /// `created_at` of an existing row is kept; everything else is
    /// overwritten. Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn upsert_user_profile(
        &self,
        name: &str,
        email: &str,
        metrics: &Profile,
        targets: &Targets,
    ) -> AppResult<UserRecord> {
        let now = Utc::now().to_rfc3339();
        let profile_data = serde_json::to_string(metrics)?;
        let targets_data = serde_json::to_string(targets)?;

        sqlx::query(
            r"
            INSERT INTO user_profiles (email, name, profile_data, targets_data, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(email) DO UPDATE SET
                name = ?2,
                profile_data = ?3,
                targets_data = ?4,
                updated_at = ?5
            ",
        )
        .bind(email)
        .bind(name)
        .bind(&profile_data)
        .bind(&targets_data)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save user profile: {e}")))?;

        self.get_user_profile(email)
            .await?
            .ok_or_else(|| AppError::internal(format!("Profile for {email} missing after save")))
    }

    /// Get the stored profile for `email`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is corrupt
    pub async fn get_user_profile(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query(
            r"
            SELECT email, name, profile_data, targets_data, created_at, updated_at
            FROM user_profiles
            WHERE email = ?1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user profile: {e}")))?;

        row.map_or(Ok(None), |row| {
            let profile_data: String = row.get("profile_data");
            let targets_data: String = row.get("targets_data");
            let created_at: String = row.get("created_at");
            let updated_at: String = row.get("updated_at");

            Ok(Some(UserRecord {
                name: row.get("name"),
                email: row.get("email"),
                metrics: serde_json::from_str(&profile_data)?,
                targets: serde_json::from_str(&targets_data)?,
                created_at: parse_timestamp(&created_at),
                updated_at: parse_timestamp(&updated_at),
            }))
        })
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}
