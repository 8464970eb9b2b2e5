// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Serves the root endpoint and /health for load balancer health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};

use crate::constants::routes;
use crate::models::HealthResponse;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<HealthResponse> {
            Json(HealthResponse {
                status: "healthy".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            })
        }

        Router::new()
            .route(routes::ROOT, get(health_handler))
            .route(routes::HEALTH, get(health_handler))
    }
}
