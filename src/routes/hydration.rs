// ABOUTME: Hydration route handlers for the daily water intake counter
// ABOUTME: Reads and applies saturating changes to today's glasses count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use diet_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{json_rejection, normalize_email, ServerResources};
use crate::constants::routes;
use crate::intelligence::HydrationTracker;
use crate::middleware::RequestContext;

/// Body of `POST /api/hydration/:email`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HydrationUpdateRequest {
    /// Signed change in glasses
    pub delta: i64,
}

/// Today's hydration state
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationStatus {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Glasses logged
    pub glasses: u32,
    /// Goal for the day
    pub daily_goal: u32,
    /// Fraction of the goal reached
    pub progress: f64,
    /// Whether the goal has been met
    pub complete: bool,
}

impl HydrationStatus {
    fn new(date: NaiveDate, tracker: &HydrationTracker) -> Self {
        Self {
            date,
            glasses: tracker.glasses(),
            daily_goal: tracker.daily_goal(),
            progress: tracker.progress(),
            complete: tracker.is_complete(),
        }
    }
}

/// Hydration routes
pub struct HydrationRoutes;

impl HydrationRoutes {
    /// Create all hydration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::HYDRATION,
                get(Self::handle_get_hydration).post(Self::handle_update_hydration),
            )
            .with_state(resources)
    }

    /// GET `/api/hydration/:email` - Today's count
    async fn handle_get_hydration(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        Path(email): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let today = Utc::now().date_naive();
        let tracker = Self::load_tracker(&resources, &email, today)
            .await
            .map_err(|e| e.with_request_id(context.request_id))?;

        Ok(Json(serde_json::json!({
            "success": true,
            "data": HydrationStatus::new(today, &tracker),
        })))
    }

    /// POST `/api/hydration/:email` - Apply a signed change to today's count
    async fn handle_update_hydration(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        Path(email): Path<String>,
        body: Result<Json<HydrationUpdateRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        Self::update_hydration(&resources, &email, body)
            .await
            .map_err(|e| e.with_request_id(context.request_id))
    }

    async fn update_hydration(
        resources: &ServerResources,
        email: &str,
        body: Result<Json<HydrationUpdateRequest>, JsonRejection>,
    ) -> AppResult<Json<serde_json::Value>> {
        let Json(update) = body.map_err(|e| json_rejection(&e))?;
        let email = normalize_email(email)?;
        let today = Utc::now().date_naive();
        let daily_goal = resources.config.hydration.daily_goal_glasses;

        let glasses = resources
            .database
            .apply_hydration_delta(email, today, update.delta, daily_goal)
            .await?;
        let tracker = HydrationTracker::new(glasses, daily_goal);
        debug!(email, glasses, "Updated hydration log");

        Ok(Json(serde_json::json!({
            "success": true,
            "data": HydrationStatus::new(today, &tracker),
        })))
    }

    async fn load_tracker(
        resources: &ServerResources,
        email: &str,
        date: NaiveDate,
    ) -> AppResult<HydrationTracker> {
        let email = normalize_email(email)?;
        let glasses = resources
            .database
            .get_hydration(email, date)
            .await?
            .unwrap_or_default();

        Ok(HydrationTracker::new(
            glasses,
            resources.config.hydration.daily_goal_glasses,
        ))
    }
}
