//! Shared test doubles for pipeline tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use docqa::domain::errors::{RagError, RagResult};
use docqa::domain::models::{Chunk, EmbeddedChunk, RetrievedMatch};
use docqa::domain::ports::{AnswerSynthesizer, VectorStore};

/// Vector store backed by a `Vec`, searching by dot product. Vectors are
/// unit-norm in these tests, so dot product is cosine similarity.
#[derive(Default)]
pub struct InMemoryVectorStore {
    rows: Mutex<Vec<EmbeddedChunk>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn ready(&self) -> RagResult<()> {
        Ok(())
    }

    async fn ensure_collection(&self) -> RagResult<()> {
        Ok(())
    }

    async fn upsert(&self, chunks: &[EmbeddedChunk]) -> RagResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        rows.extend_from_slice(chunks);
        Ok(chunks.len())
    }

    async fn query_nearest(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedMatch>> {
        let rows = self.rows.lock().unwrap();
        let mut scored: Vec<(f32, Chunk)> = rows
            .iter()
            .map(|row| {
                let score: f32 = row
                    .vector
                    .iter()
                    .zip(vector)
                    .map(|(a, b)| a * b)
                    .sum();
                (score, row.chunk.clone())
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored
            .into_iter()
            .take(top_k)
            .enumerate()
            .map(|(rank, (score, chunk))| RetrievedMatch { chunk, score, rank })
            .collect())
    }
}

/// Synthesizer returning a fixed answer, or an error when scripted to fail.
pub struct ScriptedSynthesizer {
    answer: Option<String>,
}

impl ScriptedSynthesizer {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { answer: None })
    }
}

#[async_trait]
impl AnswerSynthesizer for ScriptedSynthesizer {
    async fn synthesize(&self, _context: &str, _question: &str) -> RagResult<String> {
        self.answer
            .clone()
            .ok_or_else(|| RagError::AnswerSynthesis("scripted failure".to_string()))
    }
}
