//! Retrieval results and the orchestrator's decision record.

use serde::{Deserialize, Serialize};

use super::chunk::Chunk;

/// One result of a similarity query: a stored chunk plus its score.
///
/// Scores are comparable within a single query only, never across queries
/// or across embedding models. Higher is more relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedMatch {
    pub chunk: Chunk,
    pub score: f32,
    /// Zero-based rank position within the query's result list.
    pub rank: usize,
}

/// The orchestrator's decision record for one answered query.
///
/// Invariant: when `found` is false, `answer` is the verbatim fallback
/// message and `source_url` is absent.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub query: String,
    pub matches: Vec<RetrievedMatch>,
    pub answer: String,
    pub found: bool,
    pub source_url: Option<String>,
}
