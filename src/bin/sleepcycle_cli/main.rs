// ABOUTME: SleepCycle CLI - command-line client for the SleepCycle-Alarm API
// ABOUTME: Sends calculation requests over HTTP and pretty-prints the returned options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs
//!
//! Usage:
//! ```bash
//! # Calculate bedtimes for a 07:30 wake time with defaults
//! sleepcycle-cli calculate 07:30
//!
//! # Custom latency and cycle length
//! sleepcycle-cli calculate 06:00 --latency 20 --cycle 85
//!
//! # Manage saved defaults
//! sleepcycle-cli preferences show
//! sleepcycle-cli preferences set --latency 20
//! sleepcycle-cli preferences reset
//! ```
//!
//! The CLI contains no calculation logic of its own; it is purely a remote
//! client for a running `sleepcycle-server`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sleepcycle_server::constants::defaults;
use sleepcycle_server::logging::{LogFormat, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "sleepcycle-cli",
    about = "SleepCycle-Alarm CLI",
    long_about = "Command-line client for the SleepCycle-Alarm API. Calculates optimal bedtimes \
                  for a target wake time by calling a running sleepcycle-server over HTTP."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the API server
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate bedtime options for a wake time
    Calculate {
        /// Wake time in HH:MM format (24-hour)
        wake_time: String,

        /// Minutes to fall asleep (0-60)
        #[arg(long, default_value_t = defaults::SLEEP_LATENCY_MIN)]
        latency: u32,

        /// Sleep cycle duration in minutes (60-110)
        #[arg(long, default_value_t = defaults::CYCLE_LENGTH_MIN)]
        cycle: u32,

        /// Minimum number of cycles to show (1-10)
        #[arg(long, default_value_t = defaults::MIN_CYCLES)]
        min_cycles: u32,

        /// Maximum number of cycles to show (1-10)
        #[arg(long, default_value_t = defaults::MAX_CYCLES)]
        max_cycles: u32,
    },

    /// Manage saved default calculation parameters
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PreferencesCommand {
    /// Show the currently saved defaults
    Show,

    /// Save new defaults (omitted fields fall back to system defaults)
    Set {
        /// Default minutes to fall asleep (0-60)
        #[arg(long)]
        latency: Option<u32>,

        /// Default sleep cycle duration in minutes (60-110)
        #[arg(long)]
        cycle: Option<u32>,

        /// Default minimum cycles (1-10)
        #[arg(long)]
        min_cycles: Option<u32>,

        /// Default maximum cycles (1-10)
        #[arg(long)]
        max_cycles: Option<u32>,
    },

    /// Reset saved defaults to the system defaults
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig {
            level: "debug".into(),
            format: LogFormat::Compact,
        }
        .init()?;
    }

    match cli.command {
        Command::Calculate {
            wake_time,
            latency,
            cycle,
            min_cycles,
            max_cycles,
        } => {
            commands::calculate::execute(&cli.url, wake_time, latency, cycle, min_cycles, max_cycles)
                .await
        }
        Command::Preferences { action } => match action {
            PreferencesCommand::Show => commands::preferences::show(&cli.url).await,
            PreferencesCommand::Set {
                latency,
                cycle,
                min_cycles,
                max_cycles,
            } => commands::preferences::set(&cli.url, latency, cycle, min_cycles, max_cycles).await,
            PreferencesCommand::Reset => commands::preferences::reset(&cli.url).await,
        },
    }
}
