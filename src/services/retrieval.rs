//! Vector retrieval: embed the query, search the store, apply the
//! relevance threshold.

use std::sync::Arc;

use crate::domain::errors::RagResult;
use crate::domain::models::RetrievedMatch;
use crate::domain::ports::{EmbeddingProvider, VectorStore};

/// Outcome of a retrieval pass before synthesis.
pub struct Retrieval {
    /// Matches at or above the threshold, best first.
    pub matches: Vec<RetrievedMatch>,
    /// Source document of the best surviving match, if any.
    pub top_source: Option<String>,
}

/// Embeds queries and searches the vector store.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Retrieve up to `top_k` matches for `query`, discarding anything
    /// scoring below `min_score`.
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
        min_score: f32,
    ) -> RagResult<Retrieval> {
        let vector = self.embedder.embed_one(query).await?;
        let raw = self.store.query_nearest(&vector, top_k).await?;
        let before = raw.len();
        let matches: Vec<RetrievedMatch> =
            raw.into_iter().filter(|m| m.score >= min_score).collect();
        if matches.len() < before {
            tracing::debug!(
                discarded = before - matches.len(),
                min_score,
                "dropped matches below relevance threshold"
            );
        }
        let top_source = matches.first().map(|m| m.chunk.source_document.clone());
        Ok(Retrieval {
            matches,
            top_source,
        })
    }
}
