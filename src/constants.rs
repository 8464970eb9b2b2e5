// ABOUTME: Centralized constants for route paths, defaults, and environment variables
// ABOUTME: Single source of truth shared by the server, the routes, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

/// HTTP route paths
pub mod routes {
    /// API version prefix for all calculation and preferences endpoints
    pub const API_BASE: &str = "/api/v1";
    /// Bedtime calculation endpoint
    pub const CALCULATE: &str = "/api/v1/calculate";
    /// Quick calculation endpoint (defaults, query parameter only)
    pub const CALCULATE_QUICK: &str = "/api/v1/calculate/quick";
    /// Preferences endpoint (POST/GET/DELETE)
    pub const PREFERENCES: &str = "/api/v1/preferences";
    /// Health check endpoint
    pub const HEALTH: &str = "/health";
    /// Root endpoint, also a health check
    pub const ROOT: &str = "/";
}

/// Default calculation parameters, used when a caller omits a field
pub mod defaults {
    /// Default minutes to fall asleep
    pub const SLEEP_LATENCY_MIN: u32 = 15;
    /// Default sleep cycle duration in minutes
    pub const CYCLE_LENGTH_MIN: u32 = 90;
    /// Default minimum cycles to calculate
    pub const MIN_CYCLES: u32 = 4;
    /// Default maximum cycles to calculate
    pub const MAX_CYCLES: u32 = 6;

    /// Default HTTP port for the server
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
}

/// Environment variable names for server configuration
pub mod env_config {
    /// Override the HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Override the bind address
    pub const HOST: &str = "HOST";
    /// Comma-separated CORS origin allowlist, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
