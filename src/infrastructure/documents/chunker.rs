//! Character-window chunker with boundary snapping.
//!
//! Splits page text into overlapping segments of at most `chunk_size`
//! characters. The window end prefers natural breaks — paragraph, then
//! sentence, then word — over hard character cuts, and a snap is accepted
//! only when the window still advances past the overlap region, so
//! adjacent chunks from one page always overlap by exactly
//! `chunk_overlap` characters.

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{Chunk, ChunkerConfig, PageRecord};

/// Page-text chunker.
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> RagResult<Self> {
        config
            .validate()
            .map_err(RagError::InvalidInput)?;
        Ok(Self { config })
    }

    /// Chunk an ordered sequence of pages, preserving page order.
    ///
    /// A page with empty or whitespace-only content fails the whole call
    /// with [`RagError::EmptyContent`]; strict validation so a caller
    /// ingesting a mixed batch learns immediately which page is defective.
    pub fn chunk_pages(&self, pages: &[PageRecord]) -> RagResult<Vec<Chunk>> {
        let mut chunks = Vec::new();
        for page in pages {
            chunks.extend(self.chunk_page(page)?);
        }
        Ok(chunks)
    }

    fn chunk_page(&self, page: &PageRecord) -> RagResult<Vec<Chunk>> {
        if page.page_content.trim().is_empty() {
            return Err(RagError::EmptyContent {
                source_document: page.source_document.clone(),
                page_number: page.page_number,
            });
        }

        let chars: Vec<char> = page.page_content.chars().collect();
        let total = chars.len();
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let window_end = (start + self.config.chunk_size).min(total);
            let mut cut = window_end;

            if self.config.respect_boundaries && window_end < total {
                if let Some(offset) =
                    boundary_offset(&chars[start..window_end], self.config.chunk_overlap)
                {
                    cut = start + offset;
                }
            }

            chunks.push(Chunk {
                text: chars[start..cut].iter().collect(),
                source_document: page.source_document.clone(),
                page_number: page.page_number,
            });

            if cut >= total {
                break;
            }
            start = cut - self.config.chunk_overlap;
        }

        Ok(chunks)
    }
}

/// Find the best cut offset within a window, or `None` for a hard cut.
///
/// Tiers: paragraph break, sentence end, word break. A candidate is valid
/// only when `offset > min_offset`, which guarantees the next window start
/// (`cut - overlap`) moves forward.
fn boundary_offset(window: &[char], min_offset: usize) -> Option<usize> {
    // Paragraph break: cut after "\n\n".
    for i in (1..window.len()).rev() {
        if window[i] == '\n' && window[i - 1] == '\n' && i + 1 > min_offset {
            return Some(i + 1);
        }
    }
    // Sentence end.
    for i in (0..window.len()).rev() {
        if matches!(window[i], '.' | '!' | '?' | '\n') && i + 1 > min_offset {
            return Some(i + 1);
        }
    }
    // Word break.
    for i in (0..window.len()).rev() {
        if window[i].is_whitespace() && i + 1 > min_offset {
            return Some(i + 1);
        }
    }
    None
}
