// ABOUTME: Integration tests for the health check endpoints
// ABOUTME: Validates the root and /health responses and CORS preflight behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sleepcycle_server::config::ServerConfig;
use sleepcycle_server::server::{HttpServer, ServerResources};
use std::error::Error;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let resources = Arc::new(ServerResources::new());
    HttpServer::router(resources, &ServerConfig::default())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_root_is_also_a_health_check() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let request = Request::builder().uri("/").body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "healthy");

    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_by_default() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/calculate")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert!(response.status().is_success());
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("preflight must carry allow-origin");
    assert_eq!(allow_origin, "*");

    Ok(())
}
