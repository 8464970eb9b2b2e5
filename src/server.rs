// ABOUTME: HTTP server assembly and lifecycle for the SleepCycle API
// ABOUTME: Builds the router from the domain route modules and serves it with axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Server assembly
//!
//! [`ServerResources`] carries the shared state handed to every route module:
//! the stateless calculator and the injected preferences store. The router is
//! assembled separately from serving so integration tests can drive it with
//! `tower::ServiceExt::oneshot` without binding a socket.

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::calculator::BedtimeCalculator;
use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::preferences::{MemoryPreferencesStore, PreferencesStore};
#[cfg(feature = "openapi")]
use crate::routes::OpenApiRoutes;
use crate::routes::{CalculateRoutes, HealthRoutes, PreferencesRoutes};

/// Shared state handed to the route modules
pub struct ServerResources {
    /// The stateless calculation core
    pub calculator: BedtimeCalculator,
    /// Store for default calculation parameters
    pub preferences: Arc<dyn PreferencesStore>,
}

impl ServerResources {
    /// Resources with the in-memory preferences store
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: BedtimeCalculator,
            preferences: Arc::new(MemoryPreferencesStore::new()),
        }
    }
}

impl Default for ServerResources {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server for the SleepCycle API
pub struct HttpServer {
    config: ServerConfig,
    resources: Arc<ServerResources>,
}

impl HttpServer {
    #[must_use]
    pub fn new(config: ServerConfig, resources: Arc<ServerResources>) -> Self {
        Self { config, resources }
    }

    /// Assemble the full application router
    #[must_use]
    pub fn router(resources: Arc<ServerResources>, config: &ServerConfig) -> Router {
        let router = Router::new()
            .merge(HealthRoutes::routes())
            .merge(CalculateRoutes::routes(resources.clone()))
            .merge(PreferencesRoutes::routes(resources));

        #[cfg(feature = "openapi")]
        let router = router.merge(OpenApiRoutes::routes());

        router
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(config))
    }

    /// Bind the configured address and serve until the process is stopped.
    ///
    /// # Errors
    ///
    /// Fails when the address cannot be bound or the server loop errors.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.http_port);
        let router = Self::router(self.resources, &self.config);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("HTTP server listening on {addr}");

        axum::serve(listener, router)
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}
