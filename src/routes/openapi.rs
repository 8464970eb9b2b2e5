// ABOUTME: OpenAPI documentation endpoint with Swagger UI for the SleepCycle API
// ABOUTME: Serves the machine-readable spec at /api-docs/openapi.json and interactive docs at /swagger-ui
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! `OpenAPI` documentation routes
//!
//! This module provides `OpenAPI` 3.0 specification generation and Swagger UI
//! for exploring and testing the SleepCycle API.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::{ErrorCode, ErrorResponse, ErrorResponseDetails};
use crate::models::{
    CalculateRequest, CalculateResponse, CalculationParameters, HealthResponse, Preferences,
    PreferencesResponse, SleepOption,
};

/// `OpenAPI` documentation for the SleepCycle API
///
/// Provides the `OpenAPI` 3.0 specification with schema definitions for API
/// contract validation. Path annotations require standalone functions (not
/// impl methods), so only schemas are currently generated.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SleepCycle-Alarm API",
        version = "0.1.0",
        description = "Calculate optimal bedtimes based on sleep cycles. \
            Helps you wake up refreshed by aligning wake time with sleep cycle completion.",
        license(name = "MIT OR Apache-2.0"),
        contact(
            name = "SleepCycle Labs",
            url = "https://github.com/sleepcycle-labs/sleepcycle_server"
        )
    ),
    tags(
        (name = "calculate", description = "Bedtime calculation"),
        (name = "preferences", description = "Default calculation parameters")
    ),
    components(
        schemas(
            CalculateRequest,
            CalculateResponse,
            CalculationParameters,
            SleepOption,
            Preferences,
            PreferencesResponse,
            HealthResponse,
            ErrorResponse,
            ErrorResponseDetails,
            ErrorCode,
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// `OpenAPI` routes provider
pub struct OpenApiRoutes;

impl OpenApiRoutes {
    /// Create `OpenAPI` documentation routes
    ///
    /// Provides:
    /// - `/swagger-ui` - Interactive Swagger UI documentation
    /// - `/api-docs/openapi.json` - Raw `OpenAPI` 3.0 JSON specification
    pub fn routes() -> Router {
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }
}
