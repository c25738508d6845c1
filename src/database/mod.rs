// ABOUTME: SQLite persistence for user profiles and daily hydration logs
// ABOUTME: Connection pool setup and schema migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Stores one [`UserRecord`](diet_core::models::UserRecord) per email and one
//! hydration count per email per UTC day.

mod hydration;
mod profiles;

use crate::config::environment::DatabaseUrl;
use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

/// Database manager for profile and hydration storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created, the
    /// connection fails, or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        let pool = match url {
            // Every connection to :memory: is a separate database, so keep
            // exactly one alive for the lifetime of the pool
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&url.to_connection_string())
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
                // Ensure SQLite creates the database file if it doesn't exist
                SqlitePoolOptions::new()
                    .connect(&format!("{}?mode=rwc", url.to_connection_string()))
                    .await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!("Database ready at {url}");

        Ok(db)
    }

    /// Close every pooled connection, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be created
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_profiles().await?;
        self.migrate_hydration().await?;
        Ok(())
    }

    async fn migrate_profiles(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                email TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                profile_data TEXT NOT NULL,
                targets_data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_hydration(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS hydration_logs (
                email TEXT NOT NULL,
                log_date TEXT NOT NULL,
                glasses INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (email, log_date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
