// ABOUTME: Profile route handlers for target calculation, persistence, and lookup
// ABOUTME: Parses loosely typed form input into a Profile at the HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile routes
//!
//! - `POST /api/calculate-and-save` computes targets and upserts the record
//! - `GET /api/profile/:email` returns the stored record
//! - `POST /api/targets` computes targets without storing anything

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use diet_core::errors::{AppError, AppResult, InvalidProfileError, ProfileField};
use diet_core::models::{Gender, Goal, Profile, Targets, UserRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{json_rejection, normalize_email, ServerResources};
use crate::constants::routes;
use crate::intelligence::{compute_targets, derive_insights, ProfileInsights};
use crate::middleware::RequestContext;

/// A number sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    /// JSON number
    Number(f64),
    /// Form input text
    Text(String),
}

impl LooseNumber {
    /// Numeric value, or `None` if the text does not parse as a finite number
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

/// Body of the profile endpoints
///
/// Every field is optional at the serde level so that all missing fields can
/// be reported together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateProfileRequest {
    /// Display name
    pub name: Option<String>,
    /// Record key
    pub email: Option<String>,
    /// Body weight (kg)
    pub weight: Option<LooseNumber>,
    /// Height (cm)
    pub height: Option<LooseNumber>,
    /// Age (years)
    pub age: Option<LooseNumber>,
    /// Gender label
    pub gender: Option<String>,
    /// Activity multiplier
    #[serde(alias = "activityFactor")]
    pub activity: Option<LooseNumber>,
    /// Goal label, defaults to maintain
    pub goal: Option<String>,
}

impl CalculateProfileRequest {
    /// Build a typed profile
    ///
    /// Absent, null, and blank values count as missing. Age is truncated to
    /// whole years.
    ///
    /// # Errors
    ///
    /// `MISSING_REQUIRED_FIELD` listing every missing profile field, or
    /// `INVALID_PROFILE` listing every value that is not a finite number
    pub fn to_profile(&self) -> AppResult<Profile> {
        let missing = self.missing_fields(false);
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }
        self.parse_profile().map_err(AppError::from)
    }

    /// Build name, email, and profile for a record that will be stored
    ///
    /// # Errors
    ///
    /// As [`Self::to_profile`], with `name` and `email` also required
    pub fn to_record_parts(&self) -> AppResult<(String, String, Profile)> {
        let missing = self.missing_fields(true);
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }
        let profile = self.parse_profile()?;
        let name = self.name.as_deref().unwrap_or_default().trim().to_owned();
        let email = normalize_email(self.email.as_deref().unwrap_or_default())?.to_owned();
        Ok((name, email, profile))
    }

    fn missing_fields(&self, require_identity: bool) -> Vec<&'static str> {
        let text_missing =
            |value: &Option<String>| value.as_deref().map_or(true, |s| s.trim().is_empty());
        let number_missing =
            |value: &Option<LooseNumber>| value.as_ref().map_or(true, LooseNumber::is_blank);

        let mut missing = Vec::new();
        if require_identity {
            if text_missing(&self.name) {
                missing.push("name");
            }
            if text_missing(&self.email) {
                missing.push("email");
            }
        }
        for (field, value) in [
            ("weight", &self.weight),
            ("height", &self.height),
            ("age", &self.age),
        ] {
            if number_missing(value) {
                missing.push(field);
            }
        }
        if text_missing(&self.gender) {
            missing.push("gender");
        }
        if number_missing(&self.activity) {
            missing.push("activity");
        }
        missing
    }

    fn parse_profile(&self) -> Result<Profile, InvalidProfileError> {
        let mut invalid = Vec::new();
        let mut number = |value: &Option<LooseNumber>, field: ProfileField| {
            let parsed = value.as_ref().and_then(LooseNumber::as_f64);
            if parsed.is_none() {
                invalid.push(field);
            }
            parsed.unwrap_or_default()
        };

        let weight_kg = number(&self.weight, ProfileField::Weight);
        let height_cm = number(&self.height, ProfileField::Height);
        let age = number(&self.age, ProfileField::Age);
        let activity_factor = number(&self.activity, ProfileField::ActivityFactor);

        if !invalid.is_empty() {
            return Err(InvalidProfileError::new(invalid));
        }

        Ok(Profile {
            weight_kg,
            height_cm,
            // Values below one year become 0 and fail validation
            age: if age >= 1.0 { age.trunc() as u32 } else { 0 },
            gender: Gender::from_str_lossy(self.gender.as_deref().unwrap_or_default()),
            activity_factor,
            goal: self
                .goal
                .as_deref()
                .map_or(Goal::Maintain, Goal::from_str_lossy),
        })
    }
}

/// Stateless preview payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsPreview {
    /// Parsed profile
    pub metrics: Profile,
    /// Computed targets
    pub targets: Targets,
    /// Derived dashboard figures
    pub insights: ProfileInsights,
}

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::CALCULATE_AND_SAVE, post(Self::handle_calculate_and_save))
            .route(routes::TARGETS, post(Self::handle_preview_targets))
            .route(routes::PROFILE, get(Self::handle_get_profile))
            .with_state(resources)
    }

    /// POST /api/calculate-and-save - Compute targets and upsert by email
    async fn handle_calculate_and_save(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        body: Result<Json<CalculateProfileRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        Self::calculate_and_save(&resources, body)
            .await
            .map_err(|e| e.with_request_id(context.request_id))
    }

    async fn calculate_and_save(
        resources: &ServerResources,
        body: Result<Json<CalculateProfileRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let (name, email, profile) = request.to_record_parts()?;
        let targets = compute_targets(&profile, &resources.config.nutrition)?;

        let record = resources
            .database
            .upsert_user_profile(&name, &email, &profile, &targets)
            .await?;
        info!(
            email = %record.email,
            daily_calories = record.targets.daily_calories,
            "Saved profile targets"
        );

        let insights = derive_insights(&record.metrics, &record.targets);
        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "data": record,
                "insights": insights,
            })),
        ))
    }

    /// POST /api/targets - Compute targets without persisting
    async fn handle_preview_targets(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        body: Result<Json<CalculateProfileRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        Self::preview_targets(&resources, body).map_err(|e| e.with_request_id(context.request_id))
    }

    fn preview_targets(
        resources: &ServerResources,
        body: Result<Json<CalculateProfileRequest>, JsonRejection>,
    ) -> AppResult<Json<serde_json::Value>> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let metrics = request.to_profile()?;
        let targets = compute_targets(&metrics, &resources.config.nutrition)?;
        let insights = derive_insights(&metrics, &targets);

        Ok(Json(serde_json::json!({
            "success": true,
            "data": TargetsPreview {
                metrics,
                targets,
                insights,
            },
        })))
    }

    /// GET `/api/profile/:email` - Fetch the stored record
    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        Path(email): Path<String>,
    ) -> AppResult<impl IntoResponse> {
        let record = Self::find_profile(&resources, &email)
            .await
            .map_err(|e| e.with_request_id(context.request_id))?;

        let insights = derive_insights(&record.metrics, &record.targets);
        Ok(Json(serde_json::json!({
            "success": true,
            "data": record,
            "insights": insights,
        })))
    }

    async fn find_profile(resources: &ServerResources, email: &str) -> AppResult<UserRecord> {
        let email = normalize_email(email)?;
        resources
            .database
            .get_user_profile(email)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Profile for {email}")).with_resource_id(email)
            })
    }
}
