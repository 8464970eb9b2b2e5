// ABOUTME: HTTP middleware module organization
// ABOUTME: Currently CORS only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

/// Cross-Origin Resource Sharing configuration
pub mod cors;

pub use cors::setup_cors;
