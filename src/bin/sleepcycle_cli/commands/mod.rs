// ABOUTME: CLI command implementations and shared HTTP helpers
// ABOUTME: Each submodule implements one subcommand against the remote API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

pub mod calculate;
pub mod preferences;

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use sleepcycle_server::errors::ErrorResponse;
use std::time::Duration;

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client used by all commands
pub(crate) fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")
}

/// Join the base URL and an API path
pub(crate) fn api_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Fail with the server's error message when the response is not a success.
///
/// Validation failures come back as a structured [`ErrorResponse`]; anything
/// else is reported with just the status code.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match response.json::<ErrorResponse>().await {
        Ok(body) => bail!("API error ({status}): {}", body.error.message),
        Err(_) => bail!("API error ({status})"),
    }
}
