// ABOUTME: Route module organization for the SleepCycle HTTP endpoints
// ABOUTME: Route definitions organized by domain with thin handlers over the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Route module for the SleepCycle server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the calculator or the preferences store.

/// Bedtime calculation routes
pub mod calculate;
/// Health check and system status routes
pub mod health;
/// `OpenAPI` documentation routes (feature-gated)
#[cfg(feature = "openapi")]
pub mod openapi;
/// Preferences routes
pub mod preferences;

/// Bedtime calculation route handlers
pub use calculate::CalculateRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// `OpenAPI` route handlers
#[cfg(feature = "openapi")]
pub use openapi::OpenApiRoutes;
/// Preferences route handlers
pub use preferences::PreferencesRoutes;
