//! Implementation of the `docqa init` command.

use anyhow::{Context, Result};

use crate::infrastructure::setup::App;

/// Verify the vector store is reachable and ensure the collection exists.
pub async fn execute(app: &App, json_mode: bool) -> Result<()> {
    app.store
        .ready()
        .await
        .context("Vector store is not ready")?;
    app.store
        .ensure_collection()
        .await
        .context("Failed to create collection")?;

    let collection = &app.config.weaviate.collection;
    if json_mode {
        println!(
            "{}",
            serde_json::json!({ "success": true, "collection": collection })
        );
    } else {
        println!("Collection '{collection}' is ready");
    }
    Ok(())
}
