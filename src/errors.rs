// ABOUTME: Unified error handling system for the SleepCycle-Alarm API
// ABOUTME: Defines error codes, HTTP status mapping, and response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the SleepCycle
//! server. It defines standard error types, error codes, and HTTP response
//! formatting so that validation failures are always reported to clients in
//! the same shape.
//!
//! Every calculator error is a caller-input error and maps to a 400 response.
//! Anything unanticipated falls back to `InternalError` (500) as a safety net.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ErrorCode {
    // Validation (all caller-input errors)
    #[serde(rename = "INVALID_TIME_FORMAT")]
    InvalidTimeFormat,
    #[serde(rename = "LATENCY_OUT_OF_RANGE")]
    LatencyOutOfRange,
    #[serde(rename = "CYCLE_LENGTH_OUT_OF_RANGE")]
    CycleLengthOutOfRange,
    #[serde(rename = "CYCLE_COUNT_OUT_OF_RANGE")]
    CycleCountOutOfRange,
    #[serde(rename = "MIN_EXCEEDS_MAX")]
    MinExceedsMax,

    // Internal errors
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            ErrorCode::InvalidTimeFormat
            | ErrorCode::LatencyOutOfRange
            | ErrorCode::CycleLengthOutOfRange
            | ErrorCode::CycleCountOutOfRange
            | ErrorCode::MinExceedsMax => 400,

            // 500 Internal Server Error
            ErrorCode::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTimeFormat => "The wake time is not a valid HH:MM clock time",
            ErrorCode::LatencyOutOfRange => "The sleep latency is outside the acceptable range",
            ErrorCode::CycleLengthOutOfRange => {
                "The sleep cycle length is outside the acceptable range"
            }
            ErrorCode::CycleCountOutOfRange => {
                "The requested cycle count is outside the acceptable range"
            }
            ErrorCode::MinExceedsMax => "The minimum cycle count exceeds the maximum",
            ErrorCode::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Malformed or out-of-range wake time, carrying the original input
    pub fn invalid_time_format(raw: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidTimeFormat,
            format!(
                "wake_time must be in HH:MM format (24-hour). Got: {}",
                raw.into()
            ),
        )
    }

    /// Sleep latency outside `[0, 60]` minutes
    pub fn latency_out_of_range(value: u32) -> Self {
        Self::new(
            ErrorCode::LatencyOutOfRange,
            format!("sleep_latency_min must be between 0 and 60 minutes, got {value}"),
        )
    }

    /// Cycle length outside `[60, 110]` minutes
    pub fn cycle_length_out_of_range(value: u32) -> Self {
        Self::new(
            ErrorCode::CycleLengthOutOfRange,
            format!("cycle_length_min must be between 60 and 110 minutes, got {value}"),
        )
    }

    /// A cycle-count bound outside `[1, 10]`; `field` names the offending bound
    pub fn cycle_count_out_of_range(field: &str, value: u32) -> Self {
        Self::new(
            ErrorCode::CycleCountOutOfRange,
            format!("{field} must be between 1 and 10, got {value}"),
        )
    }

    /// `min_cycles` greater than `max_cycles`
    pub fn min_exceeds_max(min_cycles: u32, max_cycles: u32) -> Self {
        Self::new(
            ErrorCode::MinExceedsMax,
            format!(
                "min_cycles ({min_cycles}) must be less than or equal to max_cycles ({max_cycles})"
            ),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, message = %self.message, "request failed");
        } else {
            tracing::debug!(code = ?self.code, message = %self.message, "rejected request");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Conversion from `anyhow::Error`, the generic server-error safety net
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::new(ErrorCode::InternalError, error.to_string())
    }
}
