//! PDF document loading.
//!
//! Extracts per-page raw text with `pdf-extract`, producing 1-indexed
//! [`PageRecord`]s in page order. Extraction is CPU-bound, so it runs on
//! the blocking thread pool.

use std::path::Path;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::PageRecord;

/// Whether a path looks like a PDF file (case-insensitive extension check).
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Load a PDF from disk into per-page records.
///
/// Returns an empty vector for a zero-page document and
/// [`RagError::DocumentLoad`] when the file cannot be opened or parsed.
pub async fn load_pdf(path: &Path) -> RagResult<Vec<PageRecord>> {
    let source_document = path
        .file_name()
        .map_or_else(|| path.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned());

    let owned = path.to_path_buf();
    let pages = tokio::task::spawn_blocking(move || pdf_extract::extract_text_by_pages(&owned))
        .await
        .map_err(|e| RagError::DocumentLoad(format!("extraction task failed: {e}")))?
        .map_err(|e| RagError::DocumentLoad(format!("failed to load PDF: {e}")))?;

    Ok(to_page_records(pages, &source_document))
}

/// Load a PDF from an in-memory buffer (upload path).
pub async fn load_pdf_bytes(source_document: &str, bytes: Vec<u8>) -> RagResult<Vec<PageRecord>> {
    let pages =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .await
            .map_err(|e| RagError::DocumentLoad(format!("extraction task failed: {e}")))?
            .map_err(|e| RagError::DocumentLoad(format!("failed to load PDF: {e}")))?;

    Ok(to_page_records(pages, source_document))
}

fn to_page_records(pages: Vec<String>, source_document: &str) -> Vec<PageRecord> {
    pages
        .into_iter()
        .enumerate()
        .map(|(index, page_content)| PageRecord {
            page_content,
            source_document: source_document.to_string(),
            page_number: u32::try_from(index + 1).unwrap_or(u32::MAX),
        })
        .collect()
}
