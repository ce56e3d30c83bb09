//! OpenAI-compatible embedding adapter.
//!
//! Talks to any server exposing the `/v1/embeddings` contract (OpenAI,
//! Azure OpenAI, or local servers fronting sentence-transformers models).
//! Returned vectors are re-ordered by index, checked against the configured
//! dimension, and L2-normalized so dot product equals cosine similarity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::EmbeddingConfig;
use crate::domain::ports::EmbeddingProvider;

/// Embedding provider backed by an OpenAI-compatible HTTP endpoint.
pub struct OpenAiEmbeddingProvider {
    config: EmbeddingConfig,
    client: reqwest::Client,
}

impl OpenAiEmbeddingProvider {
    pub fn new(config: EmbeddingConfig) -> RagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagError::Embedding(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    async fn call_embeddings_api(&self, texts: Vec<String>) -> RagResult<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.config.base_url.trim_end_matches('/'));

        let request_body = EmbeddingsRequest {
            model: self.config.model.clone(),
            input: texts,
        };

        let mut request = self.client.post(&url).json(&request_body);
        if !self.config.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.config.api_key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| RagError::Embedding(format!("embedding request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(RagError::Embedding(format!(
                "embedding API returned {status}: {body}"
            )));
        }

        let result: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| RagError::Embedding(format!("failed to parse embedding response: {e}")))?;

        // Restore input order; some servers return data out of order.
        let mut data = result.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn normalize(mut vector: Vec<f32>) -> Vec<f32> {
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    async fn embed(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = self.call_embeddings_api(texts.to_vec()).await?;

        // All-or-nothing: a short or dimensionally wrong response means the
        // whole batch is unusable.
        if vectors.len() != texts.len() {
            return Err(RagError::Embedding(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }
        for vector in &vectors {
            if vector.len() != self.config.dimension {
                return Err(RagError::Embedding(format!(
                    "expected dimension {}, got {}",
                    self.config.dimension,
                    vector.len()
                )));
            }
        }

        Ok(vectors.into_iter().map(Self::normalize).collect())
    }
}

// -- Wire types --

#[derive(Debug, Serialize)]
struct EmbeddingsRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}
