//! Integration tests for the Weaviate adapter against a mock HTTP server.

use docqa::domain::errors::RagError;
use docqa::domain::models::{Chunk, EmbeddedChunk, WeaviateConfig};
use docqa::domain::ports::VectorStore;
use docqa::adapters::weaviate::WeaviateStore;

fn store_for(server: &mockito::ServerGuard) -> WeaviateStore {
    WeaviateStore::new(WeaviateConfig {
        url: server.url(),
        api_key: String::new(),
        collection: "DemoCollection".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn embedded(text: &str) -> EmbeddedChunk {
    EmbeddedChunk {
        chunk: Chunk {
            text: text.to_string(),
            source_document: "doc.pdf".to_string(),
            page_number: 1,
        },
        vector: vec![0.1, 0.2, 0.3],
    }
}

#[tokio::test]
async fn test_ready_probe() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/.well-known/ready")
        .with_status(200)
        .create_async()
        .await;

    let store = store_for(&server);
    store.ready().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_store_is_a_connection_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/.well-known/ready")
        .with_status(503)
        .create_async()
        .await;

    let store = store_for(&server);
    assert!(matches!(store.ready().await, Err(RagError::Connection(_))));
}

#[tokio::test]
async fn test_ensure_collection_skips_creation_when_class_exists() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/schema/DemoCollection")
        .with_status(200)
        .with_body(r#"{"class":"DemoCollection"}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/v1/schema")
        .expect(0)
        .create_async()
        .await;

    let store = store_for(&server);
    store.ensure_collection().await.unwrap();
    create.assert_async().await;
}

#[tokio::test]
async fn test_ensure_collection_creates_missing_class() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/schema/DemoCollection")
        .with_status(404)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/v1/schema")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "class": "DemoCollection",
            "vectorizer": "none",
        })))
        .with_status(200)
        .create_async()
        .await;

    let store = store_for(&server);
    store.ensure_collection().await.unwrap();
    create.assert_async().await;
}

#[tokio::test]
async fn test_upsert_reports_stored_count() {
    let mut server = mockito::Server::new_async().await;
    let batch = server
        .mock("POST", "/v1/batch/objects")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"result":{}},{"result":{}}]"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let stored = store
        .upsert(&[embedded("first"), embedded("second")])
        .await
        .unwrap();

    batch.assert_async().await;
    assert_eq!(stored, 2);
}

#[tokio::test]
async fn test_upsert_surfaces_per_object_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/batch/objects")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"result":{"errors":{"error":[{"message":"invalid vector length"}]}}}]"#,
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let result = store.upsert(&[embedded("bad")]).await;

    match result {
        Err(RagError::VectorStoreWrite(message)) => {
            assert!(message.contains("invalid vector length"));
        }
        other => panic!("expected VectorStoreWrite error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_parses_matches_and_skips_malformed_rows() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"Get":{"DemoCollection":[
                {"chunk_text":"best match","filename":"a.pdf","page_number":2,
                 "_additional":{"certainty":0.95}},
                {"filename":"malformed.pdf"},
                {"chunk_text":"second match","filename":"b.pdf","page_number":7,
                 "_additional":{"certainty":0.80}}
            ]}}}"#,
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let matches = store.query_nearest(&[0.1, 0.2, 0.3], 5).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].chunk.text, "best match");
    assert_eq!(matches[0].rank, 0);
    assert!((matches[0].score - 0.95).abs() < 1e-6);
    assert_eq!(matches[1].chunk.source_document, "b.pdf");
    assert_eq!(matches[1].rank, 1);
}

#[tokio::test]
async fn test_query_graphql_errors_fail_the_query() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors":[{"message":"class not found"}]}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let result = store.query_nearest(&[0.1], 5).await;

    assert!(matches!(result, Err(RagError::VectorStoreQuery(_))));
}

#[tokio::test]
async fn test_query_empty_collection_yields_no_matches() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"Get":{"DemoCollection":[]}}}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let matches = store.query_nearest(&[0.1], 5).await.unwrap();
    assert!(matches.is_empty());
}
