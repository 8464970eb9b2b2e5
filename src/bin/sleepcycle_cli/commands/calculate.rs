// ABOUTME: Calculate subcommand - requests bedtime options from the API
// ABOUTME: Posts the five calculation fields and pretty-prints the returned options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

use anyhow::{Context, Result};
use sleepcycle_server::constants::routes;
use sleepcycle_server::models::{CalculateRequest, CalculateResponse};

use super::{api_url, check_status, http_client};

/// Run a calculation against the API and print the options
pub async fn execute(
    base_url: &str,
    wake_time: String,
    latency: u32,
    cycle: u32,
    min_cycles: u32,
    max_cycles: u32,
) -> Result<()> {
    let client = http_client()?;
    let request = CalculateRequest {
        wake_time,
        sleep_latency_min: latency,
        cycle_length_min: cycle,
        min_cycles,
        max_cycles,
    };

    let response = client
        .post(api_url(base_url, routes::CALCULATE))
        .json(&request)
        .send()
        .await
        .with_context(|| {
            format!("could not reach the API at {base_url} (is sleepcycle-server running?)")
        })?;

    let data: CalculateResponse = check_status(response)
        .await?
        .json()
        .await
        .context("invalid response body")?;

    display_results(&data);
    Ok(())
}

/// Print the calculation results in a readable format
fn display_results(data: &CalculateResponse) {
    let separator = "=".repeat(60);

    println!("\n{separator}");
    println!("  BEDTIME OPTIONS FOR WAKING AT {}", data.wake_time);
    println!("{separator}\n");

    println!("Parameters:");
    println!(
        "  - Sleep latency: {} minutes",
        data.parameters.sleep_latency_min
    );
    println!(
        "  - Cycle length: {} minutes\n",
        data.parameters.cycle_length_min
    );

    for (i, option) in data.options.iter().enumerate() {
        let hours = option.total_sleep_minutes / 60;
        let minutes = option.total_sleep_minutes % 60;

        println!("{}. Go to bed at: {}", i + 1, option.bedtime);
        println!("   - {} sleep cycles", option.cycles);
        println!("   - Total sleep: {hours}h {minutes}m");
        if option.recommended {
            println!("   RECOMMENDED");
        }
        println!();
    }

    println!("Choose one of these times to wake up refreshed!");
    println!("{separator}\n");
}
