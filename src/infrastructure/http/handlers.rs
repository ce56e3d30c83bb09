//! HTTP request handlers for the ingestion and query endpoints.
//!
//! Handlers always respond with a well-formed JSON body; the HTTP status
//! mirrors the `statusCode` field inside it.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::models::{IngestResponse, QueryRequest, QueryResponse};
use crate::services::{DocumentSource, IngestionService, QueryService};

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<IngestionService>,
    pub query: Arc<QueryService>,
}

/// `POST /upload` — multipart PDF ingestion.
///
/// Every part must carry `application/pdf`; anything else rejects the
/// whole request before any document is processed.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<IngestResponse>) {
    let mut sources = Vec::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field
                    .file_name()
                    .map_or_else(|| "upload.pdf".to_string(), ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                if content_type.as_deref() != Some("application/pdf") {
                    return respond_ingest(IngestResponse::rejected(format!(
                        "File {name} is not a PDF"
                    )));
                }
                match field.bytes().await {
                    Ok(bytes) => sources.push(DocumentSource {
                        name,
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => {
                        return respond_ingest(IngestResponse::rejected(format!(
                            "Failed to read upload {name}: {e}"
                        )));
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return respond_ingest(IngestResponse::rejected(format!(
                    "Malformed multipart request: {e}"
                )));
            }
        }
    }

    respond_ingest(state.ingestion.ingest_sources(sources).await)
}

/// `POST /query` — answer a question against the stored documents.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> (StatusCode, Json<QueryResponse>) {
    let response = state.query.answer(request).await;
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

fn respond_ingest(response: IngestResponse) -> (StatusCode, Json<IngestResponse>) {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}
