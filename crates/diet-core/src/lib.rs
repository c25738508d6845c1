// ABOUTME: Core types for the Diet-To-Discipline nutrition service
// ABOUTME: Foundation crate with unified error handling and the profile/targets model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Core
//!
//! Foundation crate shared by the nutrition service and its binaries. It is
//! designed to change infrequently so the calculator and HTTP layers can
//! build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InvalidProfileError`
//! - **models**: Biometric profile, nutrition targets, and persisted user records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Profile, Targets, UserRecord)
pub mod models;
