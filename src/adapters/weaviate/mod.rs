//! Weaviate vector store adapter.
//!
//! Implements the [`VectorStore`] port over Weaviate's REST and GraphQL
//! APIs: readiness probe, idempotent collection creation, batched object
//! upserts carrying client-side vectors, and `nearVector` similarity
//! queries scored by `certainty`.
//!
//! GraphQL result rows are parsed defensively. The store may return rows
//! with missing or malformed properties; such rows are skipped with a
//! warning instead of failing the whole query.

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{Chunk, EmbeddedChunk, RetrievedMatch, WeaviateConfig};
use crate::domain::ports::VectorStore;

/// Objects per batch request; matches Weaviate's recommended batch sizing.
const BATCH_SIZE: usize = 200;

/// Weaviate-backed implementation of the vector store gateway.
pub struct WeaviateStore {
    config: WeaviateConfig,
    client: reqwest::Client,
}

impl WeaviateStore {
    pub fn new(config: WeaviateConfig) -> RagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagError::Connection(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.url.trim_end_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.config.api_key.is_empty() {
            request
        } else {
            request.header(
                "Authorization",
                format!("Bearer {}", self.config.api_key),
            )
        }
    }

    /// Parse one GraphQL result row into a match, or `None` when the row is
    /// malformed (missing/empty `chunk_text`, non-object shape).
    fn parse_row(row: &Value) -> Option<(Chunk, f32)> {
        let properties = row.as_object()?;

        let text = properties.get("chunk_text")?.as_str()?;
        if text.is_empty() {
            return None;
        }

        let source_document = properties
            .get("filename")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let page_number = properties
            .get("page_number")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        let score = properties
            .get("_additional")
            .and_then(|a| a.get("certainty"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0) as f32;

        Some((
            Chunk {
                text: text.to_string(),
                source_document,
                page_number,
            },
            score,
        ))
    }
}

#[async_trait]
impl VectorStore for WeaviateStore {
    async fn ready(&self) -> RagResult<()> {
        let response = self
            .authorized(self.client.get(self.endpoint("/v1/.well-known/ready")))
            .send()
            .await
            .map_err(|e| RagError::Connection(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RagError::Connection(format!(
                "Weaviate is not ready (status {})",
                response.status()
            )))
        }
    }

    async fn ensure_collection(&self) -> RagResult<()> {
        let class_url = self.endpoint(&format!("/v1/schema/{}", self.config.collection));
        let existing = self
            .authorized(self.client.get(&class_url))
            .send()
            .await
            .map_err(|e| RagError::Connection(e.to_string()))?;

        if existing.status().is_success() {
            tracing::debug!(collection = %self.config.collection, "Collection already exists");
            return Ok(());
        }

        let class_definition = json!({
            "class": self.config.collection,
            "vectorizer": "none",
            "properties": [
                { "name": "chunk_text", "dataType": ["text"] },
                { "name": "filename", "dataType": ["text"] },
                { "name": "page_number", "dataType": ["int"] },
            ],
        });

        let response = self
            .authorized(self.client.post(self.endpoint("/v1/schema")))
            .json(&class_definition)
            .send()
            .await
            .map_err(|e| RagError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(collection = %self.config.collection, "Created collection");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        // Racing creation from a parallel worker is fine.
        if body.contains("already exists") {
            return Ok(());
        }
        Err(RagError::VectorStoreWrite(format!(
            "failed to create collection (status {status}): {body}"
        )))
    }

    async fn upsert(&self, chunks: &[EmbeddedChunk]) -> RagResult<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        let mut total_stored = 0;
        for batch in chunks.chunks(BATCH_SIZE) {
            let objects: Vec<Value> = batch
                .iter()
                .map(|embedded| {
                    json!({
                        "class": self.config.collection,
                        "id": Uuid::new_v4().to_string(),
                        "properties": {
                            "chunk_text": embedded.chunk.text,
                            "filename": embedded.chunk.source_document,
                            "page_number": embedded.chunk.page_number,
                        },
                        "vector": embedded.vector,
                    })
                })
                .collect();

            let response = self
                .authorized(self.client.post(self.endpoint("/v1/batch/objects")))
                .json(&json!({ "objects": objects }))
                .send()
                .await
                .map_err(|e| RagError::VectorStoreWrite(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(RagError::VectorStoreWrite(format!(
                    "batch insert returned {status}: {body}"
                )));
            }

            let results: Value = response
                .json()
                .await
                .map_err(|e| RagError::VectorStoreWrite(e.to_string()))?;

            // The batch endpoint reports per-object status; a failed object
            // fails the whole ingestion batch.
            if let Some(rows) = results.as_array() {
                for row in rows {
                    if let Some(message) = row
                        .pointer("/result/errors/error/0/message")
                        .and_then(Value::as_str)
                    {
                        return Err(RagError::VectorStoreWrite(message.to_string()));
                    }
                }
                total_stored += rows.len();
            } else {
                total_stored += batch.len();
            }
        }

        tracing::info!(count = total_stored, collection = %self.config.collection, "Stored embedded chunks");
        Ok(total_stored)
    }

    async fn query_nearest(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedMatch>> {
        let vector_json =
            serde_json::to_string(vector).map_err(|e| RagError::VectorStoreQuery(e.to_string()))?;
        let graphql = format!(
            "{{ Get {{ {collection}(nearVector: {{vector: {vector_json}}}, limit: {top_k}) \
             {{ chunk_text filename page_number _additional {{ certainty }} }} }} }}",
            collection = self.config.collection,
        );

        let response = self
            .authorized(self.client.post(self.endpoint("/v1/graphql")))
            .json(&json!({ "query": graphql }))
            .send()
            .await
            .map_err(|e| RagError::VectorStoreQuery(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RagError::VectorStoreQuery(format!(
                "graphql query returned {status}: {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RagError::VectorStoreQuery(e.to_string()))?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                return Err(RagError::VectorStoreQuery(errors[0].to_string()));
            }
        }

        let rows = body
            .pointer(&format!("/data/Get/{}", self.config.collection))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut matches = Vec::with_capacity(rows.len());
        for row in &rows {
            match Self::parse_row(row) {
                Some((chunk, score)) => matches.push(RetrievedMatch {
                    chunk,
                    score,
                    rank: matches.len(),
                }),
                None => {
                    tracing::warn!("Skipping malformed result row from vector store");
                }
            }
        }

        Ok(matches)
    }
}
