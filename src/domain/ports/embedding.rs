//! Embedding provider port.
//!
//! Converts text into fixed-length vectors for similarity search. The
//! provider is constructed once at process startup and shared read-only
//! across in-flight requests; a fresh load per request would be
//! prohibitively expensive.

use async_trait::async_trait;

use crate::domain::errors::{RagError, RagResult};

/// Trait for embedding providers.
///
/// Implementations must return unit-normalized vectors so that dot-product
/// similarity is equivalent to cosine similarity, and must be all-or-nothing:
/// either every input is embedded or the call fails entirely.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Provider name (e.g., "openai", "hash").
    fn name(&self) -> &'static str;

    /// Embedding dimension for this provider/model.
    fn dimension(&self) -> usize;

    /// Generate one unit-length vector per input text.
    async fn embed(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>>;

    /// Generate an embedding for a single text (query-time path).
    async fn embed_one(&self, text: &str) -> RagResult<Vec<f32>> {
        let vectors = self.embed(std::slice::from_ref(&text.to_string())).await?;
        vectors
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Embedding("empty embedding response".to_string()))
    }
}

/// Deterministic token-hashing embedder.
///
/// Maps each whitespace token to a bucket via a fixed-seed hash and
/// normalizes the result to unit length. Embedding the same text twice
/// yields bit-identical vectors, which makes it suitable for offline tests
/// and local development without a model server. Not semantically
/// meaningful beyond shared-token overlap.
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimension: usize,
}

impl HashEmbeddingProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0f32; self.dimension];
        for token in text.split_whitespace() {
            let token = token.to_lowercase();
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let digest = hasher.finish();
            let index = (digest as usize) % self.dimension;
            let weight = ((digest >> 32) as u32) as f32 / u32::MAX as f32;
            vector[index] += 1.0 + weight;
        }
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-6);
        for x in &mut vector {
            *x /= norm;
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }
}
