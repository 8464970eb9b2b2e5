// ABOUTME: Route handlers for the bedtime calculation endpoints
// ABOUTME: Thin wrappers that validate, delegate to the calculator, and serialize
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Bedtime calculation routes
//!
//! `POST /api/v1/calculate` takes the full parameter set (each field
//! independently defaulted), `GET /api/v1/calculate/quick` only needs a
//! `wake_time` query parameter. Both return the same response shape: the
//! ordered options plus an echo of the parameters actually used.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::calculator::BedtimeCalculator;
use crate::constants::routes;
use crate::errors::{AppError, AppResult};
use crate::models::{CalculateRequest, CalculateResponse, CalculationParameters};
use crate::server::ServerResources;

/// Query parameters for the quick calculation endpoint
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct QuickCalculateQuery {
    /// Wake up time in HH:MM format (24-hour)
    pub wake_time: String,
}

/// Calculation routes handler
pub struct CalculateRoutes;

impl CalculateRoutes {
    /// Create all calculation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::CALCULATE, post(Self::handle_calculate))
            .route(routes::CALCULATE_QUICK, get(Self::handle_quick))
            .with_state(resources)
    }

    /// Run the calculator for a request and assemble the response
    fn build_response(
        resources: &ServerResources,
        request: &CalculateRequest,
    ) -> AppResult<CalculateResponse> {
        let wake = BedtimeCalculator::parse_wake_time(&request.wake_time)?;
        let options = resources.calculator.calculate(
            &request.wake_time,
            request.sleep_latency_min,
            request.cycle_length_min,
            request.min_cycles,
            request.max_cycles,
        )?;

        Ok(CalculateResponse {
            // Echo the wake time normalized to zero-padded HH:MM
            wake_time: wake.format("%H:%M").to_string(),
            options,
            parameters: CalculationParameters {
                sleep_latency_min: request.sleep_latency_min,
                cycle_length_min: request.cycle_length_min,
            },
        })
    }

    /// Handle `POST /api/v1/calculate`
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CalculateRequest>,
    ) -> Result<Json<CalculateResponse>, AppError> {
        let response = Self::build_response(&resources, &request)?;
        debug!(
            wake_time = %response.wake_time,
            options = response.options.len(),
            "calculated bedtime options"
        );
        Ok(Json(response))
    }

    /// Handle `GET /api/v1/calculate/quick?wake_time=HH:MM`
    async fn handle_quick(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<QuickCalculateQuery>,
    ) -> Result<Json<CalculateResponse>, AppError> {
        let request = CalculateRequest::with_defaults(query.wake_time);
        let response = Self::build_response(&resources, &request)?;
        debug!(wake_time = %response.wake_time, "quick calculation");
        Ok(Json(response))
    }
}
