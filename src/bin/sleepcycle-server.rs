// ABOUTME: Server binary for the SleepCycle-Alarm API
// ABOUTME: Loads configuration from the environment, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! # SleepCycle API Server Binary
//!
//! Starts the bedtime calculation API. Configuration comes from environment
//! variables (`HTTP_PORT`, `HOST`, `CORS_ALLOWED_ORIGINS`, `RUST_LOG`,
//! `LOG_FORMAT`), with command-line overrides for the bind address.

use anyhow::Result;
use clap::Parser;
use sleepcycle_server::{
    config::ServerConfig,
    logging,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "sleepcycle-server")]
#[command(about = "SleepCycle-Alarm API - calculate optimal bedtimes based on sleep cycles")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting SleepCycle-Alarm API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new());
    HttpServer::new(config, resources).run().await
}
