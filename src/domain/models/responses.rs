//! Wire-level response types for the ingestion and query entrypoints.
//!
//! Field names follow the original API contract: `statusCode` is camel-cased,
//! everything else is snake_case. The query entrypoint always produces a
//! well-formed `QueryResponse`, including for internal failures.

use serde::{Deserialize, Serialize};

use crate::services::prompts::FALLBACK_MESSAGE;

/// Answer text returned when query processing itself fails.
pub const PROCESSING_ERROR_ANSWER: &str = "Error occurred while processing your query.";

/// Response body for the query entrypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub query: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl QueryResponse {
    /// Grounded answer, optionally carrying the top match's source URL.
    pub fn answered(query: String, answer: String, source_url: Option<String>) -> Self {
        Self {
            status_code: 200,
            success: true,
            message: "Answer retrieved successfully".to_string(),
            query,
            answer,
            source_url,
        }
    }

    /// No relevant content retrieved; answer is the fixed fallback message.
    pub fn not_found(query: String) -> Self {
        Self {
            status_code: 404,
            success: false,
            message: "Information not found".to_string(),
            query,
            answer: FALLBACK_MESSAGE.to_string(),
            source_url: None,
        }
    }

    /// Internal failure converted into a structured result.
    pub fn processing_error(query: String, message: String) -> Self {
        Self {
            status_code: 500,
            success: false,
            message,
            query,
            answer: PROCESSING_ERROR_ANSWER.to_string(),
            source_url: None,
        }
    }
}

/// Outcome of ingesting a single source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutcome {
    pub filename: String,
    /// Number of chunks stored for this document.
    pub chunks: usize,
    /// "stored" on success, otherwise a short failure description.
    pub status: String,
}

/// Response body for the ingestion entrypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub documents_processed: usize,
    pub vectors_stored: usize,
    /// Per-document outcomes, in submission order.
    #[serde(default)]
    pub documents: Vec<DocumentOutcome>,
}

impl IngestResponse {
    pub fn stored(documents: Vec<DocumentOutcome>) -> Self {
        let vectors_stored = documents.iter().map(|d| d.chunks).sum();
        Self {
            status_code: 200,
            success: true,
            message: "PDF documents processed and stored successfully".to_string(),
            documents_processed: documents.len(),
            vectors_stored,
            documents,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            status_code: 500,
            success: false,
            message,
            documents_processed: 0,
            vectors_stored: 0,
            documents: Vec::new(),
        }
    }

    /// Rejection before any processing begins (e.g. a non-PDF upload).
    pub fn rejected(message: String) -> Self {
        Self {
            status_code: 400,
            success: false,
            message,
            documents_processed: 0,
            vectors_stored: 0,
            documents: Vec::new(),
        }
    }
}

/// Request body for the query entrypoint.
///
/// `top_k` and `min_score` are optional on the wire; omitted fields fall
/// back to the deployment's configured retrieval defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub min_score: Option<f32>,
}
