//! Document pages, chunks, and chunking configuration.

use serde::{Deserialize, Serialize};

/// Raw text extracted from a single page of a source document.
///
/// Pages are 1-indexed and emitted in page order by the document loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Raw extracted text, possibly empty for image-only pages.
    pub page_content: String,
    /// Identifier of the originating document (typically the filename).
    pub source_document: String,
    /// 1-indexed page number within the document.
    pub page_number: u32,
}

/// A contiguous span of text extracted from one document page.
///
/// Invariant: `text` is never empty. The chunker fails hard on pages with
/// no extractable content rather than emitting empty chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub source_document: String,
    pub page_number: u32,
}

/// A chunk paired with its embedding vector, ready for persistence.
///
/// Vector dimensionality is fixed by the embedding provider and must be
/// uniform across a collection; mixing embedding models would break
/// similarity comparability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    pub chunk: Chunk,
    pub vector: Vec<f32>,
}

/// Configuration for the character-window chunker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChunkerConfig {
    /// Maximum chunk length in characters.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters of overlap between adjacent chunks. Must be < `chunk_size`.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Prefer paragraph/sentence/word boundaries over hard character cuts.
    #[serde(default = "default_true")]
    pub respect_boundaries: bool,
}

const fn default_chunk_size() -> usize {
    1500
}

const fn default_chunk_overlap() -> usize {
    200
}

const fn default_true() -> bool {
    true
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            respect_boundaries: default_true(),
        }
    }
}

impl ChunkerConfig {
    /// Validate the configuration.
    ///
    /// `chunk_size` must be positive and `chunk_overlap` strictly smaller
    /// than `chunk_size`, otherwise the window could never advance.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be positive".to_string());
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            ));
        }
        Ok(())
    }
}
