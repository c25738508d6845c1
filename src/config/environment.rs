// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::nutrition::{MacroSplitPreset, NutritionConfig};
use crate::constants::{defaults, env_keys};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; bare paths are treated as SQLite files
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:"));
        match path_str.unwrap_or(s) {
            ":memory:" => Self::Memory,
            path => Self::SQLite {
                path: PathBuf::from(path),
            },
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(defaults::DATABASE_PATH),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*"
    pub allowed_origins: String,
}

/// Hydration tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Glasses of water per day considered complete
    pub daily_goal_glasses: u32,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Selected macro split preset
    pub macro_split: MacroSplitPreset,
    /// Target calculator configuration
    pub nutrition: NutritionConfig,
    /// Hydration tracking configuration
    pub hydration: HydrationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or the
    /// resulting nutrition configuration is invalid.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the nutrition
    /// configuration fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = match lookup(env_keys::HTTP_PORT).or_else(|| lookup(env_keys::PORT)) {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid HTTP port value: {port}"))?,
            None => defaults::HTTP_PORT,
        };

        let macro_split = match lookup(env_keys::MACRO_SPLIT) {
            Some(value) => value
                .parse::<MacroSplitPreset>()
                .context("Invalid MACRO_SPLIT value")?,
            None => MacroSplitPreset::default(),
        };
        let nutrition = NutritionConfig::with_preset(macro_split);
        nutrition
            .validate()
            .context("Invalid nutrition configuration")?;

        let config = Self {
            host: lookup(env_keys::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port,
            log_level: LogLevel::from_str_or_default(
                &lookup(env_keys::RUST_LOG).unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &lookup(env_keys::ENVIRONMENT).unwrap_or_default(),
            ),
            database: DatabaseConfig {
                url: lookup(env_keys::DATABASE_URL)
                    .map_or_else(DatabaseUrl::default, |url| DatabaseUrl::parse_url(&url)),
            },
            cors: CorsConfig {
                allowed_origins: lookup(env_keys::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            },
            macro_split,
            nutrition,
            hydration: HydrationConfig {
                daily_goal_glasses: parse_or(
                    lookup(env_keys::HYDRATION_DAILY_GOAL),
                    defaults::HYDRATION_DAILY_GOAL_GLASSES,
                    env_keys::HYDRATION_DAILY_GOAL,
                )?,
            },
        };

        Ok(config)
    }

    /// Configuration for tests: in-memory database, default nutrition settings
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: 0,
            log_level: LogLevel::Warn,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            macro_split: MacroSplitPreset::default(),
            nutrition: NutritionConfig::default(),
            hydration: HydrationConfig {
                daily_goal_glasses: defaults::HYDRATION_DAILY_GOAL_GLASSES,
            },
        }
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Diet-To-Discipline Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Macro Split: {}\n\
             - Hydration Goal: {} glasses",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.database.url,
            self.cors.allowed_origins,
            self.macro_split,
            self.hydration.daily_goal_glasses,
        )
    }
}

fn parse_or<T>(value: Option<String>, default: T, key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.map_or(Ok(default), |v| {
        v.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {v}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.http_port, defaults::HTTP_PORT);
        assert_eq!(config.macro_split, MacroSplitPreset::Standard);
        assert_eq!(config.cors.allowed_origins, "http://localhost:5173");
        assert_eq!(config.hydration.daily_goal_glasses, 8);
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.database.url.is_memory());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("MACRO_SPLIT", "lower_carb"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("ENVIRONMENT", "production"),
            ("HYDRATION_DAILY_GOAL", "10"),
        ]))
        .unwrap();

        assert_eq!(config.http_port, 8081);
        assert_eq!(config.macro_split, MacroSplitPreset::LowerCarb);
        assert_eq!(
            config.nutrition.macro_split,
            MacroSplitPreset::LowerCarb.split()
        );
        assert!(config.database.url.is_memory());
        assert!(config.environment.is_production());
        assert_eq!(config.hydration.daily_goal_glasses, 10);
    }

    #[test]
    fn test_http_port_takes_precedence_over_port() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HTTP_PORT", "9000"), ("PORT", "8081")]))
                .unwrap();
        assert_eq!(config.http_port, 9000);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("MACRO_SPLIT", "keto")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup_from(&[("HYDRATION_DAILY_GOAL", "-1")])).is_err()
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(DatabaseUrl::parse_url("sqlite::memory:"), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/diet.db").to_connection_string(),
            "sqlite:./data/diet.db"
        );
        assert_eq!(
            DatabaseUrl::parse_url("/var/lib/diet.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/var/lib/diet.db")
            }
        );
    }
}
