//! Adapters for external collaborators: embedding API, vector store,
//! and generation API.

pub mod embeddings;
pub mod gemini;
pub mod weaviate;

pub use embeddings::OpenAiEmbeddingProvider;
pub use gemini::GeminiClient;
pub use weaviate::WeaviateStore;
