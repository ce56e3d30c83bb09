//! Implementation of the `docqa query` command.

use anyhow::{bail, Result};

use crate::domain::models::QueryRequest;
use crate::infrastructure::setup::App;

pub async fn execute(
    app: &App,
    question: String,
    top_k: Option<usize>,
    min_score: Option<f32>,
    json_mode: bool,
) -> Result<()> {
    // Omitted flags fall back to the configured retrieval defaults inside
    // the service, same as HTTP requests that omit the fields.
    let request = QueryRequest {
        query: question,
        top_k,
        min_score,
    };
    let response = app.query.answer(request).await;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.answer);
        if let Some(url) = &response.source_url {
            println!("\nSource: {url}");
        }
    }

    if response.status_code == 500 {
        bail!("{}", response.message);
    }
    Ok(())
}
