//! Application wiring: builds the adapters and services from a loaded
//! configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::embeddings::OpenAiEmbeddingProvider;
use crate::adapters::gemini::GeminiClient;
use crate::adapters::weaviate::WeaviateStore;
use crate::domain::models::Config;
use crate::domain::ports::{EmbeddingProvider, HashEmbeddingProvider, VectorStore};
use crate::infrastructure::documents::Chunker;
use crate::services::{IngestionService, QueryService, Retriever};

/// Fully wired application services.
pub struct App {
    pub config: Config,
    pub store: Arc<dyn VectorStore>,
    pub ingestion: Arc<IngestionService>,
    pub query: Arc<QueryService>,
}

/// Construct all adapters and services from `config`.
pub fn build(config: Config) -> Result<App> {
    let embedder = build_embedder(&config)?;
    tracing::debug!(provider = embedder.name(), dimension = embedder.dimension(), "embedder ready");

    let store: Arc<dyn VectorStore> = Arc::new(
        WeaviateStore::new(config.weaviate.clone()).context("Failed to build Weaviate client")?,
    );

    let chunker = Chunker::new(config.chunking.clone()).context("Invalid chunking config")?;
    let ingestion = Arc::new(IngestionService::new(
        chunker,
        Arc::clone(&embedder),
        Arc::clone(&store),
    ));

    let synthesizer =
        Arc::new(GeminiClient::new(config.gemini.clone()).context("Failed to build Gemini client")?);
    let retriever = Retriever::new(Arc::clone(&embedder), Arc::clone(&store));
    let query = Arc::new(QueryService::new(
        retriever,
        synthesizer,
        config.retrieval.clone(),
    ));

    Ok(App {
        config,
        store,
        ingestion,
        query,
    })
}

fn build_embedder(config: &Config) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.embedding.provider.as_str() {
        "hash" => Ok(Arc::new(HashEmbeddingProvider::new(
            config.embedding.dimension,
        ))),
        _ => Ok(Arc::new(
            OpenAiEmbeddingProvider::new(config.embedding.clone())
                .context("Failed to build embedding client")?,
        )),
    }
}
