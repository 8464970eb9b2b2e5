// ABOUTME: Bedtime calculation core: input validation, time arithmetic, option generation
// ABOUTME: Pure and deterministic; the REST layer is a thin wrapper around this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Sleep cycle calculator core logic
//!
//! The algorithm works as follows:
//! 1. Parse the wake time
//! 2. For each number of cycles (`min_cycles` to `max_cycles`):
//!    a. Total sleep time = (cycles * cycle length) + sleep latency
//!    b. Subtract total sleep time from the wake time to get the bedtime,
//!       wrapping across midnight when the subtraction crosses it
//!    c. Flag the option as recommended when it meets 7 hours or more
//! 3. Return the options sorted by cycle count, most cycles first
//!
//! The calculator holds no state and performs no I/O. For a fixed input tuple
//! the output is always identical; validation is fail-fast and the first
//! violation wins.

use chrono::{Duration, NaiveTime, Timelike};

use crate::errors::{AppError, AppResult};
use crate::models::SleepOption;

/// Calculator for optimal bedtimes based on sleep cycles
#[derive(Debug, Clone, Copy, Default)]
pub struct BedtimeCalculator;

impl BedtimeCalculator {
    /// Total sleep duration that qualifies an option as recommended (7 hours)
    pub const RECOMMENDED_SLEEP_MINUTES: u32 = 420;
    /// Minimum accepted sleep latency in minutes
    pub const MIN_SLEEP_LATENCY: u32 = 0;
    /// Maximum accepted sleep latency in minutes
    pub const MAX_SLEEP_LATENCY: u32 = 60;
    /// Minimum accepted sleep cycle length in minutes
    pub const MIN_CYCLE_LENGTH: u32 = 60;
    /// Maximum accepted sleep cycle length in minutes
    pub const MAX_CYCLE_LENGTH: u32 = 110;
    /// Minimum accepted cycle count
    pub const MIN_CYCLES: u32 = 1;
    /// Maximum accepted cycle count
    pub const MAX_CYCLES: u32 = 10;

    /// Calculate optimal bedtimes based on sleep cycles.
    ///
    /// Returns one [`SleepOption`] per cycle count in
    /// `min_cycles..=max_cycles`, sorted by cycle count descending (most
    /// sleep first). Fails with a validation error before any computation if
    /// an input is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with the matching [`crate::errors::ErrorCode`]
    /// when the wake time is malformed or a parameter is out of range.
    pub fn calculate(
        &self,
        wake_time: &str,
        sleep_latency_min: u32,
        cycle_length_min: u32,
        min_cycles: u32,
        max_cycles: u32,
    ) -> AppResult<Vec<SleepOption>> {
        let wake = Self::parse_wake_time(wake_time)?;
        Self::validate_parameters(sleep_latency_min, cycle_length_min, min_cycles, max_cycles)?;

        let mut options: Vec<SleepOption> = (min_cycles..=max_cycles)
            .map(|cycles| Self::calculate_option(wake, cycles, sleep_latency_min, cycle_length_min))
            .collect();

        // Most cycles first
        options.sort_by(|a, b| b.cycles.cmp(&a.cycles));

        Ok(options)
    }

    /// Parse a wake time in `HH:MM` 24-hour format.
    ///
    /// Leading zeros are optional on input; the canonical rendering is
    /// obtained with `format("%H:%M")`. Malformed strings, non-numeric
    /// components, and out-of-range hours or minutes all fail the same way,
    /// carrying the original input in the message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_time_format`] when the string is not a
    /// valid clock time.
    pub fn parse_wake_time(raw: &str) -> AppResult<NaiveTime> {
        let (hours, minutes) = raw
            .split_once(':')
            .ok_or_else(|| AppError::invalid_time_format(raw))?;
        let hour: u32 = hours
            .parse()
            .map_err(|_| AppError::invalid_time_format(raw))?;
        let minute: u32 = minutes
            .parse()
            .map_err(|_| AppError::invalid_time_format(raw))?;

        // from_hms_opt rejects hour > 23 and minute > 59
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| AppError::invalid_time_format(raw))
    }

    /// Validate the numeric calculation parameters.
    ///
    /// Checked in a fixed order: latency, cycle length, `min_cycles`,
    /// `max_cycles`, then the cross-field `min <= max` constraint. The
    /// preferences routes reuse this for saved defaults.
    ///
    /// # Errors
    ///
    /// Returns the [`AppError`] for the first violated constraint.
    pub fn validate_parameters(
        sleep_latency_min: u32,
        cycle_length_min: u32,
        min_cycles: u32,
        max_cycles: u32,
    ) -> AppResult<()> {
        if !(Self::MIN_SLEEP_LATENCY..=Self::MAX_SLEEP_LATENCY).contains(&sleep_latency_min) {
            return Err(AppError::latency_out_of_range(sleep_latency_min));
        }
        if !(Self::MIN_CYCLE_LENGTH..=Self::MAX_CYCLE_LENGTH).contains(&cycle_length_min) {
            return Err(AppError::cycle_length_out_of_range(cycle_length_min));
        }
        if !(Self::MIN_CYCLES..=Self::MAX_CYCLES).contains(&min_cycles) {
            return Err(AppError::cycle_count_out_of_range("min_cycles", min_cycles));
        }
        if !(Self::MIN_CYCLES..=Self::MAX_CYCLES).contains(&max_cycles) {
            return Err(AppError::cycle_count_out_of_range("max_cycles", max_cycles));
        }
        if min_cycles > max_cycles {
            return Err(AppError::min_exceeds_max(min_cycles, max_cycles));
        }
        Ok(())
    }

    /// Calculate a single bedtime option for the given number of cycles
    fn calculate_option(
        wake: NaiveTime,
        cycles: u32,
        sleep_latency_min: u32,
        cycle_length_min: u32,
    ) -> SleepOption {
        let sleep_minutes = cycles * cycle_length_min;
        let total_minutes = sleep_minutes + sleep_latency_min;

        // NaiveTime arithmetic wraps around midnight; only the time of day is
        // kept, never the date it nominally falls on
        let (bedtime, _) = wake.overflowing_sub_signed(Duration::minutes(i64::from(total_minutes)));

        let recommended = total_minutes >= Self::RECOMMENDED_SLEEP_MINUTES;

        let sleep_hours = sleep_minutes / 60;
        let sleep_mins = sleep_minutes % 60;
        let total_hours = total_minutes / 60;
        let total_mins = total_minutes % 60;
        let note = format!(
            "{cycles} cycles = {sleep_hours}h {sleep_mins}m ({sleep_minutes} min) + \
             {sleep_latency_min} min to fall asleep = {total_hours}h {total_mins}m total"
        );

        SleepOption {
            cycles,
            bedtime: format!("{:02}:{:02}", bedtime.hour(), bedtime.minute()),
            total_sleep_hours: f64::from(total_minutes) / 60.0,
            total_sleep_minutes: total_minutes,
            recommended,
            note,
        }
    }
}
