//! Domain models: documents, chunks, retrieval results, configuration,
//! and wire-level response types.

pub mod chunk;
pub mod config;
pub mod responses;
pub mod retrieval;

pub use chunk::{Chunk, ChunkerConfig, EmbeddedChunk, PageRecord};
pub use config::{
    Config, EmbeddingConfig, GeminiConfig, LoggingConfig, RetrievalConfig, ServerConfig,
    WeaviateConfig,
};
pub use responses::{
    DocumentOutcome, IngestResponse, QueryRequest, QueryResponse, PROCESSING_ERROR_ANSWER,
};
pub use retrieval::{QueryOutcome, RetrievedMatch};
