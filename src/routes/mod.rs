// ABOUTME: HTTP route assembly for the nutrition API
// ABOUTME: Shared server resources, router composition, and cross-cutting layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Routes Module
//!
//! Each domain exposes a `*Routes::routes(resources)` constructor; [`router`]
//! merges them and wraps the result in CORS, request-id, and tracing layers.

/// Liveness and readiness endpoints
pub mod health;
/// Daily hydration log endpoints
pub mod hydration;
/// Profile calculation, persistence, and lookup endpoints
pub mod profile;

pub use health::HealthRoutes;
pub use hydration::HydrationRoutes;
pub use profile::{CalculateProfileRequest, LooseNumber, ProfileRoutes};

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::{create_request_span, setup_cors, PrefixedRequestId};
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::Router;
use diet_core::errors::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Long-lived resources shared by every handler
pub struct ServerResources {
    /// Profile and hydration storage
    pub database: Database,
    /// Immutable server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle resources for sharing across handlers
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Arc<Self> {
        Arc::new(Self { database, config })
    }
}

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(HydrationRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(PrefixedRequestId))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(create_request_span)
                        .on_response(|response: &Response, latency: Duration, span: &Span| {
                            span.record("status_code", response.status().as_u16());
                            span.record("duration_ms", latency.as_millis() as u64);
                            tracing::info!("Request completed");
                        }),
                )
                .layer(cors),
        )
}

/// Map a JSON body rejection into the API error format
pub(crate) fn json_rejection(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// Record key as stored: the email with surrounding whitespace removed
pub(crate) fn normalize_email(raw: &str) -> AppResult<&str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AppError::invalid_input("Email must not be empty"));
    }
    Ok(email)
}
