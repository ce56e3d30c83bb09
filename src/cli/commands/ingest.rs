//! Implementation of the `docqa ingest` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::infrastructure::setup::App;

pub async fn execute(app: &App, files: Vec<PathBuf>, json_mode: bool) -> Result<()> {
    let response = app.ingestion.ingest_paths(&files).await;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for document in &response.documents {
            println!(
                "{}: {} ({} chunks)",
                document.filename, document.status, document.chunks
            );
        }
        println!(
            "{} document(s) processed, {} vector(s) stored",
            response.documents_processed, response.vectors_stored
        );
    }

    if !response.success {
        bail!("{}", response.message);
    }
    Ok(())
}
