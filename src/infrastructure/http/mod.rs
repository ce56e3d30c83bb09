//! HTTP server exposing the ingestion and query endpoints.

pub mod handlers;

use anyhow::{Context, Result};
use axum::routing::post;
use axum::Router;
use tracing::info;

use crate::domain::models::ServerConfig;
use self::handlers::{handle_query, handle_upload, AppState};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(handle_upload))
        .route("/query", post(handle_query))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
