// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment keys, defaults, service names, and API route paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain.

/// Environment variable names read by `ServerConfig`
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port (preferred)
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP port (fallback, common PaaS convention)
    pub const PORT: &str = "PORT";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Database location
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Macro split preset name
    pub const MACRO_SPLIT: &str = "MACRO_SPLIT";
    /// Daily hydration goal in glasses
    pub const HYDRATION_DAILY_GOAL: &str = "HYDRATION_DAILY_GOAL";
}

/// Default configuration values
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// SQLite database path
    pub const DATABASE_PATH: &str = "./data/diet.db";
    /// Web client dev server origin
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173";
    /// Glasses of water per day
    pub const HYDRATION_DAILY_GOAL_GLASSES: u32 = 8;
}

/// Service identity used in logs
pub mod service_names {
    /// HTTP server
    pub const DIET_SERVER: &str = "diet-server";
}

/// HTTP route paths
pub mod routes {
    /// Compute targets and upsert the profile
    pub const CALCULATE_AND_SAVE: &str = "/api/calculate-and-save";
    /// Stateless targets preview
    pub const TARGETS: &str = "/api/targets";
    /// Stored profile lookup by email
    pub const PROFILE: &str = "/api/profile/:email";
    /// Daily hydration log by email
    pub const HYDRATION: &str = "/api/hydration/:email";
}
