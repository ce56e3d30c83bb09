//! Docqa - Document question answering over a vector store
//!
//! Docqa ingests PDF documents into a Weaviate collection and answers
//! natural-language questions against them by retrieving the most
//! relevant chunks and synthesizing a grounded answer with Gemini.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure models, ports, and the error taxonomy
//! - **Adapter Layer** (`adapters`): Weaviate, Gemini, and embedding API clients
//! - **Service Layer** (`services`): Ingestion and query pipelines
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, documents, HTTP
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use docqa::infrastructure::{config::ConfigLoader, setup};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = setup::build(ConfigLoader::load()?)?;
//!     // app.ingestion / app.query
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{RagError, RagResult};
pub use domain::models::{
    Chunk, Config, EmbeddedChunk, IngestResponse, PageRecord, QueryRequest, QueryResponse,
    RetrievedMatch,
};
pub use domain::ports::{AnswerSynthesizer, EmbeddingProvider, VectorStore};
