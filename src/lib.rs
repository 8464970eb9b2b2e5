// ABOUTME: Main library entry point for the SleepCycle-Alarm API
// ABOUTME: Provides the bedtime calculation core and the REST API built around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

#![deny(unsafe_code)]

//! # SleepCycle Server
//!
//! Calculate optimal bedtimes based on sleep cycles. The server helps you wake
//! up refreshed by aligning your wake time with the completion of whole sleep
//! cycles instead of interrupting one.
//!
//! ## Features
//!
//! - **Bedtime calculation**: Pure, deterministic core that derives bedtime
//!   options from a wake time, a sleep-cycle length, and a sleep-onset latency
//! - **REST API**: `POST /api/v1/calculate` plus a quick GET variant
//! - **Preferences**: In-memory store for default calculation parameters
//! - **CLI client**: `sleepcycle-cli` calls the API over HTTP and pretty-prints
//!   the returned options
//!
//! ## Quick Start
//!
//! 1. Start the server with `sleepcycle-server`
//! 2. `curl -X POST localhost:8080/api/v1/calculate -H 'content-type: application/json' \
//!    -d '{"wake_time": "07:30"}'`
//! 3. Or use the CLI: `sleepcycle-cli calculate 07:30`
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **calculator**: The pure bedtime calculation algorithm
//! - **models**: Request/response structures shared by server and CLI
//! - **routes**: Axum route handlers, thin wrappers over the core
//! - **preferences**: Injectable in-memory preferences store
//! - **config**: Environment-based server configuration

/// Bedtime calculation core: validation, time arithmetic, option generation
pub mod calculator;
/// Environment-based configuration management
pub mod config;
/// Centralized constants for routes, defaults, and environment variables
pub mod constants;
/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;
/// Logging configuration and structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// Request and response models for the REST API
pub mod models;
/// In-memory preferences store
pub mod preferences;
/// HTTP route handlers organized by domain
pub mod routes;
/// HTTP server assembly and lifecycle
pub mod server;

pub use calculator::BedtimeCalculator;
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::SleepOption;
