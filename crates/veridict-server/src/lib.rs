//! # veridict-server
//!
//! HTTP surface over the Veridict evidence analyzer.
//!
//! Endpoints:
//! - `POST /api/analyze` — one evidence item, returns one result
//! - `POST /api/batch-analyze` — ordered list in, ordered list out
//! - `GET /health` — service and provider health

pub mod config;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

use config::ServerConfig;
use handlers::AppState;
use veridict_runtime::EvidenceAnalyzer;

/// Errors from server startup.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {0}: {1}")]
    Bind(SocketAddr, std::io::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Bind and serve until shutdown.
pub async fn start_server(
    server_config: ServerConfig,
    analyzer: EvidenceAnalyzer,
) -> Result<(), ServerError> {
    let addr = server_config.socket_addr();
    let app = handlers::router(AppState {
        analyzer: Arc::new(analyzer),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(addr, e))?;

    tracing::info!(%addr, "evidence analyzer API listening");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
