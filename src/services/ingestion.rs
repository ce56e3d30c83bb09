//! Document ingestion pipeline: load, chunk, embed, store.
//!
//! Each document is processed independently and its outcome recorded; a
//! failure aborts the batch, marking documents still in the queue as
//! skipped. Non-PDF inputs are rejected before any document is touched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{DocumentOutcome, EmbeddedChunk, IngestResponse, PageRecord};
use crate::domain::ports::{EmbeddingProvider, VectorStore};
use crate::infrastructure::documents::{is_pdf_path, load_pdf, load_pdf_bytes, Chunker};

/// An in-memory document to ingest (the upload path).
pub struct DocumentSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Runs the full ingestion pipeline against the configured store.
pub struct IngestionService {
    chunker: Chunker,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl IngestionService {
    pub fn new(
        chunker: Chunker,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            chunker,
            embedder,
            store,
        }
    }

    /// Ingest PDF files from disk.
    pub async fn ingest_paths(&self, paths: &[PathBuf]) -> IngestResponse {
        if paths.is_empty() {
            return IngestResponse::rejected("No files provided".to_string());
        }
        if let Some(bad) = paths.iter().find(|p| !is_pdf_path(p)) {
            return IngestResponse::rejected(format!(
                "File {} is not a PDF",
                bad.display()
            ));
        }

        if let Err(e) = self.store.ensure_collection().await {
            tracing::error!(error = %e, "failed to prepare collection");
            return IngestResponse::failed(format!("Failed to prepare collection: {e}"));
        }

        let mut outcomes = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let filename = display_name(path);
            match self.ingest_document(load_pdf(path).await).await {
                Ok(chunks) => {
                    tracing::info!(document = %filename, chunks, "document stored");
                    outcomes.push(DocumentOutcome {
                        filename,
                        chunks,
                        status: "stored".to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!(document = %filename, error = %e, "ingestion failed");
                    return Self::aborted(outcomes, filename, &e, &paths[index + 1..]);
                }
            }
        }
        IngestResponse::stored(outcomes)
    }

    /// Ingest uploaded documents already held in memory. `sources` must
    /// have passed the content-type gate at the HTTP boundary; filenames
    /// are still checked here.
    pub async fn ingest_sources(&self, sources: Vec<DocumentSource>) -> IngestResponse {
        if sources.is_empty() {
            return IngestResponse::rejected("No files provided".to_string());
        }
        if let Some(bad) = sources.iter().find(|s| !is_pdf_path(Path::new(&s.name))) {
            return IngestResponse::rejected(format!("File {} is not a PDF", bad.name));
        }

        if let Err(e) = self.store.ensure_collection().await {
            tracing::error!(error = %e, "failed to prepare collection");
            return IngestResponse::failed(format!("Failed to prepare collection: {e}"));
        }

        let mut outcomes = Vec::with_capacity(sources.len());
        let mut queue = sources.into_iter();
        while let Some(source) = queue.next() {
            let filename = source.name.clone();
            let loaded = load_pdf_bytes(&source.name, source.bytes).await;
            match self.ingest_document(loaded).await {
                Ok(chunks) => {
                    tracing::info!(document = %filename, chunks, "document stored");
                    outcomes.push(DocumentOutcome {
                        filename,
                        chunks,
                        status: "stored".to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!(document = %filename, error = %e, "ingestion failed");
                    let remaining: Vec<String> = queue.map(|s| s.name).collect();
                    return Self::aborted_names(outcomes, filename, &e, remaining);
                }
            }
        }
        IngestResponse::stored(outcomes)
    }

    async fn ingest_document(&self, pages: RagResult<Vec<PageRecord>>) -> RagResult<usize> {
        self.ingest_pages(&pages?).await
    }

    /// Chunk, embed, and store already-loaded pages. Returns the number of
    /// chunks written.
    pub async fn ingest_pages(&self, pages: &[PageRecord]) -> RagResult<usize> {
        let chunks = self.chunker.chunk_pages(pages)?;
        if chunks.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = self.embedder.embed(&texts).await?;
        if vectors.len() != chunks.len() {
            return Err(RagError::Embedding(format!(
                "expected {} vectors, got {}",
                chunks.len(),
                vectors.len()
            )));
        }

        let embedded: Vec<EmbeddedChunk> = chunks
            .into_iter()
            .zip(vectors)
            .map(|(chunk, vector)| EmbeddedChunk { chunk, vector })
            .collect();
        self.store.upsert(&embedded).await
    }

    fn aborted(
        outcomes: Vec<DocumentOutcome>,
        failed: String,
        error: &RagError,
        remaining: &[PathBuf],
    ) -> IngestResponse {
        let names = remaining.iter().map(display_name).collect();
        Self::aborted_names(outcomes, failed, error, names)
    }

    fn aborted_names(
        mut outcomes: Vec<DocumentOutcome>,
        failed: String,
        error: &RagError,
        remaining: Vec<String>,
    ) -> IngestResponse {
        outcomes.push(DocumentOutcome {
            filename: failed.clone(),
            chunks: 0,
            status: error.to_string(),
        });
        for name in remaining {
            outcomes.push(DocumentOutcome {
                filename: name,
                chunks: 0,
                status: "skipped".to_string(),
            });
        }
        let mut response =
            IngestResponse::failed(format!("Failed to process document {failed}: {error}"));
        response.documents = outcomes;
        response
    }
}

fn display_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |n| n.to_string_lossy().into_owned(),
    )
}
