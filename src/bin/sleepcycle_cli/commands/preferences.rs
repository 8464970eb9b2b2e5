// ABOUTME: Preferences subcommands - show, set, and reset saved defaults over HTTP
// ABOUTME: Omitted fields are left to the server's serde defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use sleepcycle_server::constants::routes;
use sleepcycle_server::models::{Preferences, PreferencesResponse};

use super::{api_url, check_status, http_client};

/// Show the currently saved defaults
pub async fn show(base_url: &str) -> Result<()> {
    let client = http_client()?;
    let response = client
        .get(api_url(base_url, routes::PREFERENCES))
        .send()
        .await
        .with_context(|| {
            format!("could not reach the API at {base_url} (is sleepcycle-server running?)")
        })?;

    let preferences: Preferences = check_status(response)
        .await?
        .json()
        .await
        .context("invalid response body")?;

    display_preferences(&preferences);
    Ok(())
}

/// Save new defaults; fields not given on the command line fall back to the
/// system defaults server-side
pub async fn set(
    base_url: &str,
    latency: Option<u32>,
    cycle: Option<u32>,
    min_cycles: Option<u32>,
    max_cycles: Option<u32>,
) -> Result<()> {
    let mut body = Map::new();
    if let Some(latency) = latency {
        body.insert("sleep_latency_min".into(), json!(latency));
    }
    if let Some(cycle) = cycle {
        body.insert("cycle_length_min".into(), json!(cycle));
    }
    if let Some(min_cycles) = min_cycles {
        body.insert("min_cycles".into(), json!(min_cycles));
    }
    if let Some(max_cycles) = max_cycles {
        body.insert("max_cycles".into(), json!(max_cycles));
    }

    let client = http_client()?;
    let response = client
        .post(api_url(base_url, routes::PREFERENCES))
        .json(&Value::Object(body))
        .send()
        .await
        .with_context(|| {
            format!("could not reach the API at {base_url} (is sleepcycle-server running?)")
        })?;

    let saved: PreferencesResponse = check_status(response)
        .await?
        .json()
        .await
        .context("invalid response body")?;

    println!("{}", saved.message);
    display_preferences(&saved.preferences);
    Ok(())
}

/// Reset saved defaults to the system defaults
pub async fn reset(base_url: &str) -> Result<()> {
    let client = http_client()?;
    let response = client
        .delete(api_url(base_url, routes::PREFERENCES))
        .send()
        .await
        .with_context(|| {
            format!("could not reach the API at {base_url} (is sleepcycle-server running?)")
        })?;

    let result: PreferencesResponse = check_status(response)
        .await?
        .json()
        .await
        .context("invalid response body")?;

    println!("{}", result.message);
    display_preferences(&result.preferences);
    Ok(())
}

fn display_preferences(preferences: &Preferences) {
    println!("Saved defaults:");
    println!("  - Sleep latency: {} minutes", preferences.sleep_latency_min);
    println!("  - Cycle length: {} minutes", preferences.cycle_length_min);
    println!("  - Min cycles: {}", preferences.min_cycles);
    println!("  - Max cycles: {}", preferences.max_cycles);
}
