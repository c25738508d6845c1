// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Handles environment configs and nutrition calculator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: Server configuration from environment variables
//! - **Nutrition**: Coefficients, offsets, and macro split presets for the target calculator

/// Environment and server configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Nutrition target calculator configuration
pub mod nutrition;

pub use environment::ServerConfig;
pub use error::ConfigError;
pub use nutrition::{MacroSplit, MacroSplitPreset, NutritionConfig};
