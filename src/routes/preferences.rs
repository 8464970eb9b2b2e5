// ABOUTME: Route handlers for the user preferences endpoints
// ABOUTME: Save, read, and reset default calculation parameters in the injected store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Preferences routes
//!
//! Preferences are stored in memory only and reset on server restart. Saved
//! values go through the same range validation as a calculation request so a
//! later calculation using them cannot fail.

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

use crate::calculator::BedtimeCalculator;
use crate::constants::routes;
use crate::errors::AppError;
use crate::models::{Preferences, PreferencesResponse};
use crate::server::ServerResources;

/// Preferences routes handler
pub struct PreferencesRoutes;

impl PreferencesRoutes {
    /// Create all preferences routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::PREFERENCES, post(Self::handle_save))
            .route(routes::PREFERENCES, get(Self::handle_get))
            .route(routes::PREFERENCES, delete(Self::handle_reset))
            .with_state(resources)
    }

    /// Handle `POST /api/v1/preferences`
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        Json(preferences): Json<Preferences>,
    ) -> Result<Json<PreferencesResponse>, AppError> {
        BedtimeCalculator::validate_parameters(
            preferences.sleep_latency_min,
            preferences.cycle_length_min,
            preferences.min_cycles,
            preferences.max_cycles,
        )?;

        resources.preferences.save(preferences.clone());
        debug!(?preferences, "preferences saved");

        Ok(Json(PreferencesResponse {
            message: "Preferences saved successfully".into(),
            preferences,
        }))
    }

    /// Handle `GET /api/v1/preferences`
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Preferences> {
        Json(resources.preferences.get())
    }

    /// Handle `DELETE /api/v1/preferences`
    async fn handle_reset(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<PreferencesResponse> {
        resources.preferences.reset();
        debug!("preferences reset to defaults");

        Json(PreferencesResponse {
            message: "Preferences reset to defaults".into(),
            preferences: resources.preferences.get(),
        })
    }
}
