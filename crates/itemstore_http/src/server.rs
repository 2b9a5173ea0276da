//! # HTTP Server
//!
//! Prepares storage, binds the listener and serves the item router until
//! Ctrl-C.

use std::sync::Arc;

use axum::Router;
use itemstore_core::db::ensure_schema;
use log::{info, warn};
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::error::ServerError;
use super::routes::{item_routes, AppState};

/// HTTP server for the item store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.db_path.clone()));
        let router = item_routes(state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the configured `host:port`, resolving hostnames such as
    /// `localhost`.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr.as_str())
            .await
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }

    /// Create the schema if needed, then serve until shutdown.
    ///
    /// Schema preparation runs before the listener binds, so no request can
    /// observe a missing `items` table.
    pub async fn start(self) -> Result<(), ServerError> {
        let db_path = self.config.db_path.clone();
        tokio::task::spawn_blocking(move || ensure_schema(db_path)).await??;

        let listener = self.bind().await?;
        info!(
            "event=server_start module=http status=ok addr={} db_path={}",
            listener.local_addr()?,
            self.config.db_path.display()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("event=server_stop module=http status=ok");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=http status=error error={err}");
        std::future::pending::<()>().await;
    }
}
