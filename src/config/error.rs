// ABOUTME: Configuration error types for environment and nutrition settings
// ABOUTME: Raised when an environment value cannot be parsed or a setting is out of range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights or fractions do not add up
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A value is outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}
