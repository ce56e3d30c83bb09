//! End-to-end query pipeline tests over in-memory doubles.
//!
//! Uses the deterministic hash embedder so retrieval scores are real
//! cosine similarities, not canned values.

mod common;

use std::sync::Arc;

use docqa::domain::models::{ChunkerConfig, PageRecord, QueryRequest, RetrievalConfig};
use docqa::domain::ports::HashEmbeddingProvider;
use docqa::infrastructure::documents::Chunker;
use docqa::services::prompts::FALLBACK_MESSAGE;
use docqa::services::{IngestionService, QueryService, Retriever};

use common::{InMemoryVectorStore, ScriptedSynthesizer};

const DIMENSION: usize = 64;

fn page(content: &str, source: &str) -> PageRecord {
    PageRecord {
        page_content: content.to_string(),
        source_document: source.to_string(),
        page_number: 1,
    }
}

async fn populated_store(
    pages: &[PageRecord],
) -> (Arc<InMemoryVectorStore>, Arc<HashEmbeddingProvider>) {
    let store = InMemoryVectorStore::new();
    let embedder = Arc::new(HashEmbeddingProvider::new(DIMENSION));
    let ingestion = IngestionService::new(
        Chunker::new(ChunkerConfig::default()).unwrap(),
        embedder.clone(),
        store.clone(),
    );
    ingestion.ingest_pages(pages).await.unwrap();
    (store, embedder)
}

fn request(query: &str, top_k: usize, min_score: f32) -> QueryRequest {
    QueryRequest {
        query: query.to_string(),
        top_k: Some(top_k),
        min_score: Some(min_score),
    }
}

#[tokio::test]
async fn test_answer_found_with_source_attribution() {
    let pages = [
        page(
            "For support questions, the contact email is help@example.com.",
            "https://docs.example.com/handbook.pdf",
        ),
        page(
            "Vacation policy: employees accrue two days per month.",
            "https://docs.example.com/policies.pdf",
        ),
    ];
    let (store, embedder) = populated_store(&pages).await;

    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("The contact email is help@example.com."),
        RetrievalConfig::default(),
    );
    let response = service
        .answer(request("what is the contact email", 5, 0.0))
        .await;

    assert_eq!(response.status_code, 200);
    assert!(response.success);
    assert_eq!(response.answer, "The contact email is help@example.com.");
    assert_eq!(
        response.source_url.as_deref(),
        Some("https://docs.example.com/handbook.pdf")
    );
}

#[tokio::test]
async fn test_empty_store_returns_404_fallback() {
    let store = InMemoryVectorStore::new();
    let embedder = Arc::new(HashEmbeddingProvider::new(DIMENSION));
    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("should never be called"),
        RetrievalConfig::default(),
    );

    let response = service.answer(request("anything at all", 5, 0.0)).await;

    assert_eq!(response.status_code, 404);
    assert!(!response.success);
    assert_eq!(response.answer, FALLBACK_MESSAGE);
    assert!(response.source_url.is_none());
}

#[tokio::test]
async fn test_min_score_above_all_matches_falls_back() {
    let pages = [page("Completely unrelated topic.", "misc.pdf")];
    let (store, embedder) = populated_store(&pages).await;

    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("should never be called"),
        RetrievalConfig::default(),
    );
    // Cosine similarity never reaches 1.0 for disjoint token sets; a
    // threshold of 1.0 discards everything.
    let response = service
        .answer(request("what is the refund policy", 5, 1.0))
        .await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.answer, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_declined_answer_carries_no_source() {
    let pages = [page(
        "The office closes at six.",
        "https://docs.example.com/hours.pdf",
    )];
    let (store, embedder) = populated_store(&pages).await;

    // Model declines verbatim despite retrieved context.
    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering(FALLBACK_MESSAGE),
        RetrievalConfig::default(),
    );
    let response = service
        .answer(request("when does the office close", 5, 0.0))
        .await;

    assert_eq!(response.status_code, 200);
    assert!(response.success);
    assert_eq!(response.answer, FALLBACK_MESSAGE);
    assert!(response.source_url.is_none());
}

#[tokio::test]
async fn test_bare_filename_source_is_not_attributed() {
    let pages = [page("The office closes at six.", "hours.pdf")];
    let (store, embedder) = populated_store(&pages).await;

    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("It closes at six."),
        RetrievalConfig::default(),
    );
    let response = service
        .answer(request("when does the office close", 5, 0.0))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.answer, "It closes at six.");
    assert!(response.source_url.is_none());
}

#[tokio::test]
async fn test_synthesis_failure_becomes_500_response() {
    let pages = [page("The office closes at six.", "hours.pdf")];
    let (store, embedder) = populated_store(&pages).await;

    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::failing(),
        RetrievalConfig::default(),
    );
    let response = service
        .answer(request("when does the office close", 5, 0.0))
        .await;

    assert_eq!(response.status_code, 500);
    assert!(!response.success);
    assert_eq!(response.answer, "Error occurred while processing your query.");
    assert!(response.source_url.is_none());
}

#[tokio::test]
async fn test_top_k_bounds_retrieved_matches() {
    let pages: Vec<PageRecord> = (0..4)
        .map(|i| page(&format!("Chapter {i} covers widget assembly."), "book.pdf"))
        .collect();
    let (store, embedder) = populated_store(&pages).await;

    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("Widgets are assembled in chapters."),
        RetrievalConfig::default(),
    );
    let outcome = service
        .execute(request("widget assembly", 2, 0.0))
        .await
        .unwrap();

    assert!(outcome.found);
    assert_eq!(outcome.matches.len(), 2);
    // Best first.
    assert!(outcome.matches[0].score >= outcome.matches[1].score);
}

#[tokio::test]
async fn test_configured_min_score_applies_when_request_omits_it() {
    let pages = [page("Completely unrelated topic.", "misc.pdf")];
    let (store, embedder) = populated_store(&pages).await;

    // Deployment config carries a threshold above anything a
    // disjoint-token match can score.
    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("should never be called"),
        RetrievalConfig {
            top_k: 5,
            min_score: 1.0,
        },
    );
    let response = service
        .answer(QueryRequest {
            query: "what is the refund policy".to_string(),
            top_k: None,
            min_score: None,
        })
        .await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.answer, FALLBACK_MESSAGE);

    // An explicit request value still overrides the configured default.
    let (store, embedder) = populated_store(&pages).await;
    let service = QueryService::new(
        Retriever::new(embedder, store),
        ScriptedSynthesizer::answering("still here"),
        RetrievalConfig {
            top_k: 5,
            min_score: 1.0,
        },
    );
    let response = service
        .answer(QueryRequest {
            query: "completely unrelated topic".to_string(),
            top_k: None,
            min_score: Some(0.0),
        })
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.answer, "still here");
}
