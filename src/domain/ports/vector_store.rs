//! Vector store gateway port.
//!
//! The store is an external collaborator that owns all persisted chunks.
//! The core treats it as opaque: it may return fewer than `top_k` results,
//! zero results, or malformed rows, and implementations must skip malformed
//! rows rather than fail the whole query.

use async_trait::async_trait;

use crate::domain::errors::RagResult;
use crate::domain::models::{EmbeddedChunk, RetrievedMatch};

/// Trait for vector store gateways.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Check that the store is reachable and ready.
    async fn ready(&self) -> RagResult<()>;

    /// Create the chunk collection if it does not exist. Idempotent.
    async fn ensure_collection(&self) -> RagResult<()>;

    /// Store embedded chunks; returns the number of objects stored.
    async fn upsert(&self, chunks: &[EmbeddedChunk]) -> RagResult<usize>;

    /// Nearest-neighbor query by vector similarity.
    ///
    /// Results are ordered by descending score and bounded by `top_k`.
    async fn query_nearest(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedMatch>>;
}
