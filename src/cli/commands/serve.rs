//! Implementation of the `docqa serve` command.

use std::sync::Arc;

use anyhow::Result;

use crate::infrastructure::http::{self, handlers::AppState};
use crate::infrastructure::setup::App;

pub async fn execute(app: App, port: Option<u16>) -> Result<()> {
    if let Err(e) = app.store.ready().await {
        tracing::warn!(error = %e, "vector store is not ready yet; serving anyway");
    }

    let mut server = app.config.server.clone();
    if let Some(port) = port {
        server.port = port;
    }

    let state = AppState {
        ingestion: Arc::clone(&app.ingestion),
        query: Arc::clone(&app.query),
    };
    http::serve(&server, state).await
}
