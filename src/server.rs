// ABOUTME: HTTP server assembly, binding and graceful shutdown
// ABOUTME: Merges domain routers, applies middleware layers, and serves with axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Server
//!
//! Builds the full [`Router`] from the domain route modules and runs it until
//! Ctrl+C or SIGTERM. In-flight requests finish before the process exits.

use crate::middleware::{
    propagate_request_id_layer, request_trace_layer, set_request_id_layer, setup_cors,
};
use crate::resources::ServerResources;
use crate::routes::{FridgeRoutes, HealthRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// HTTP server over shared resources
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Full application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let cors = setup_cors(&self.resources.config.cors);

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(RecipeRoutes::routes(Arc::clone(&self.resources)))
            .merge(FridgeRoutes::routes(Arc::clone(&self.resources)))
            // The last layer added sees the request first: the id is set
            // before the trace span reads it.
            .layer(propagate_request_id_layer())
            .layer(request_trace_layer())
            .layer(set_request_id_layer())
            .layer(cors)
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let app = self.router();

        info!("Binding to {address}");
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        info!("Server running on {address}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
