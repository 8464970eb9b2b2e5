// ABOUTME: Configuration module organization for the SleepCycle server
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
