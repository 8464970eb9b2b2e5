// ABOUTME: Integration tests for the preferences REST endpoints
// ABOUTME: Validates save/get/reset round trips and range validation on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sleepcycle_server::config::ServerConfig;
use sleepcycle_server::server::{HttpServer, ServerResources};
use std::error::Error;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let resources = Arc::new(ServerResources::new());
    HttpServer::router(resources, &ServerConfig::default())
}

async fn body_json(response: axum::response::Response) -> Result<Value, Box<dyn Error>> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_get_returns_defaults_before_any_save() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let response = app.oneshot(get("/api/v1/preferences")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["sleep_latency_min"], 15);
    assert_eq!(body["cycle_length_min"], 90);
    assert_eq!(body["min_cycles"], 4);
    assert_eq!(body["max_cycles"], 6);

    Ok(())
}

#[tokio::test]
async fn test_save_then_get_round_trip() -> Result<(), Box<dyn Error>> {
    // Shared state must persist across requests, so reuse one router
    let app = test_app();

    let save = post_json(
        "/api/v1/preferences",
        &json!({
            "sleep_latency_min": 20,
            "cycle_length_min": 85,
            "min_cycles": 5,
            "max_cycles": 6
        }),
    );
    let response = app.clone().oneshot(save).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["message"], "Preferences saved successfully");
    assert_eq!(body["preferences"]["sleep_latency_min"], 20);

    let response = app.oneshot(get("/api/v1/preferences")).await?;
    let body = body_json(response).await?;
    assert_eq!(body["sleep_latency_min"], 20);
    assert_eq!(body["cycle_length_min"], 85);
    assert_eq!(body["min_cycles"], 5);
    assert_eq!(body["max_cycles"], 6);

    Ok(())
}

#[tokio::test]
async fn test_save_applies_defaults_for_omitted_fields() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let save = post_json("/api/v1/preferences", &json!({"sleep_latency_min": 25}));
    let response = app.clone().oneshot(save).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/v1/preferences")).await?;
    let body = body_json(response).await?;
    assert_eq!(body["sleep_latency_min"], 25);
    // The store is overwritten wholesale; omitted fields are the defaults
    assert_eq!(body["cycle_length_min"], 90);

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_out_of_range_values() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let save = post_json("/api/v1/preferences", &json!({"sleep_latency_min": 61}));
    let response = app.clone().oneshot(save).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await?;
    assert_eq!(body["error"]["code"], "LATENCY_OUT_OF_RANGE");

    // A rejected save must not change the stored value
    let response = app.oneshot(get("/api/v1/preferences")).await?;
    let body = body_json(response).await?;
    assert_eq!(body["sleep_latency_min"], 15);

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_min_exceeding_max() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let save = post_json(
        "/api/v1/preferences",
        &json!({"min_cycles": 6, "max_cycles": 4}),
    );
    let response = app.oneshot(save).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await?;
    assert_eq!(body["error"]["code"], "MIN_EXCEEDS_MAX");

    Ok(())
}

#[tokio::test]
async fn test_reset_restores_defaults() -> Result<(), Box<dyn Error>> {
    let app = test_app();

    let save = post_json("/api/v1/preferences", &json!({"sleep_latency_min": 30}));
    let response = app.clone().oneshot(save).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let reset = Request::builder()
        .method("DELETE")
        .uri("/api/v1/preferences")
        .body(Body::empty())?;
    let response = app.clone().oneshot(reset).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["message"], "Preferences reset to defaults");
    assert_eq!(body["preferences"]["sleep_latency_min"], 15);

    let response = app.oneshot(get("/api/v1/preferences")).await?;
    let body = body_json(response).await?;
    assert_eq!(body["sleep_latency_min"], 15);

    Ok(())
}
