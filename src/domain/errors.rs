//! Domain errors for the docqa pipeline.

use thiserror::Error;

/// Errors that can occur across the ingestion and query pipelines.
///
/// Each variant maps to one failure class of the system: loading source
/// documents, strict chunking validation, embedding generation, vector
/// store persistence/retrieval, answer synthesis, and store connectivity.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("Failed to load document: {0}")]
    DocumentLoad(String),

    #[error("No content to split in '{source_document}' page {page_number}")]
    EmptyContent {
        source_document: String,
        page_number: u32,
    },

    #[error("Embedding model error: {0}")]
    Embedding(String),

    #[error("Vector store write failed: {0}")]
    VectorStoreWrite(String),

    #[error("Vector store query failed: {0}")]
    VectorStoreQuery(String),

    #[error("Answer synthesis failed: {0}")]
    AnswerSynthesis(String),

    #[error("Cannot reach vector store: {0}")]
    Connection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type RagResult<T> = Result<T, RagError>;

impl From<serde_json::Error> for RagError {
    fn from(err: serde_json::Error) -> Self {
        RagError::InvalidInput(err.to_string())
    }
}
