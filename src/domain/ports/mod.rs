//! Ports (trait boundaries) to external collaborators.

pub mod embedding;
pub mod synthesizer;
pub mod vector_store;

pub use embedding::{EmbeddingProvider, HashEmbeddingProvider};
pub use synthesizer::AnswerSynthesizer;
pub use vector_store::VectorStore;
