// ABOUTME: Request and response models for the SleepCycle REST API
// ABOUTME: Shared between the server routes and the CLI client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! API models
//!
//! Every calculation parameter is independently defaulted so callers only
//! need to provide the wake time. Defaults live in [`crate::constants`] and
//! are shared with the preferences store.

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// A single bedtime option based on a number of complete sleep cycles.
///
/// Created fresh per calculation call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SleepOption {
    /// Number of sleep cycles
    pub cycles: u32,
    /// Suggested bedtime in HH:MM format
    pub bedtime: String,
    /// Total sleep time in decimal hours (display only)
    pub total_sleep_hours: f64,
    /// Total sleep time in minutes (cycles * cycle length + latency)
    pub total_sleep_minutes: u32,
    /// Whether this option meets the recommended sleep duration (>= 7h)
    pub recommended: bool,
    /// Explanation of the calculation
    pub note: String,
}

/// Request body for `POST /api/v1/calculate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalculateRequest {
    /// Wake up time in HH:MM format (24-hour)
    pub wake_time: String,
    /// Minutes it takes to fall asleep (0-60)
    #[serde(default = "default_sleep_latency")]
    pub sleep_latency_min: u32,
    /// Duration of one sleep cycle in minutes (60-110)
    #[serde(default = "default_cycle_length")]
    pub cycle_length_min: u32,
    /// Minimum number of sleep cycles to calculate (1-10)
    #[serde(default = "default_min_cycles")]
    pub min_cycles: u32,
    /// Maximum number of sleep cycles to calculate (1-10)
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
}

impl CalculateRequest {
    /// Build a request for the given wake time with all parameters defaulted
    #[must_use]
    pub fn with_defaults(wake_time: String) -> Self {
        Self {
            wake_time,
            sleep_latency_min: defaults::SLEEP_LATENCY_MIN,
            cycle_length_min: defaults::CYCLE_LENGTH_MIN,
            min_cycles: defaults::MIN_CYCLES,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Echo of the parameters actually used for a calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalculationParameters {
    /// Minutes to fall asleep used for the calculation
    pub sleep_latency_min: u32,
    /// Cycle length in minutes used for the calculation
    pub cycle_length_min: u32,
}

/// Response body for the calculation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalculateResponse {
    /// The wake time the options were calculated for, zero-padded HH:MM
    pub wake_time: String,
    /// Bedtime options, ordered by number of cycles (descending)
    pub options: Vec<SleepOption>,
    /// The parameters used for the calculation
    pub parameters: CalculationParameters,
}

/// Default calculation parameters a user can save as preferences.
///
/// Doubles as the request body for `POST /api/v1/preferences` and as the
/// value held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Preferences {
    /// Default minutes to fall asleep
    #[serde(default = "default_sleep_latency")]
    pub sleep_latency_min: u32,
    /// Default sleep cycle duration
    #[serde(default = "default_cycle_length")]
    pub cycle_length_min: u32,
    /// Default minimum cycles
    #[serde(default = "default_min_cycles")]
    pub min_cycles: u32,
    /// Default maximum cycles
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sleep_latency_min: defaults::SLEEP_LATENCY_MIN,
            cycle_length_min: defaults::CYCLE_LENGTH_MIN,
            min_cycles: defaults::MIN_CYCLES,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Response after saving or resetting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PreferencesResponse {
    /// Success message
    pub message: String,
    /// The preferences now in effect
    pub preferences: Preferences,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// API status
    pub status: String,
    /// API version
    pub version: String,
    /// Server time, RFC 3339
    pub timestamp: String,
}

fn default_sleep_latency() -> u32 {
    defaults::SLEEP_LATENCY_MIN
}

fn default_cycle_length() -> u32 {
    defaults::CYCLE_LENGTH_MIN
}

fn default_min_cycles() -> u32 {
    defaults::MIN_CYCLES
}

fn default_max_cycles() -> u32 {
    defaults::MAX_CYCLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_request_defaults_applied() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"wake_time": "07:30"}"#).expect("minimal body parses");

        assert_eq!(request.wake_time, "07:30");
        assert_eq!(request.sleep_latency_min, 15);
        assert_eq!(request.cycle_length_min, 90);
        assert_eq!(request.min_cycles, 4);
        assert_eq!(request.max_cycles, 6);
    }

    #[test]
    fn test_preferences_default_matches_empty_body() {
        let parsed: Preferences = serde_json::from_str("{}").expect("empty body parses");
        assert_eq!(parsed, Preferences::default());
    }
}
