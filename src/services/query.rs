//! Query orchestration: retrieve, contextualize, synthesize.
//!
//! The pipeline is a straight-line state machine. Retrieval that yields
//! nothing short-circuits to the fallback result; any stage error is
//! converted into a structured processing-error response so the caller
//! always receives a well-formed body.

use std::sync::Arc;

use url::Url;

use crate::domain::errors::RagResult;
use crate::domain::models::{QueryOutcome, QueryRequest, QueryResponse, RetrievalConfig};
use crate::domain::ports::AnswerSynthesizer;
use crate::services::context::assemble_context;
use crate::services::prompts::FALLBACK_MESSAGE;
use crate::services::retrieval::Retriever;

pub struct QueryService {
    retriever: Retriever,
    synthesizer: Arc<dyn AnswerSynthesizer>,
    /// Deployment retrieval defaults, applied when a request omits
    /// `top_k` or `min_score`.
    defaults: RetrievalConfig,
}

impl QueryService {
    pub fn new(
        retriever: Retriever,
        synthesizer: Arc<dyn AnswerSynthesizer>,
        defaults: RetrievalConfig,
    ) -> Self {
        Self {
            retriever,
            synthesizer,
            defaults,
        }
    }

    /// Answer a query, never failing: internal errors become a 500-shaped
    /// response body.
    pub async fn answer(&self, request: QueryRequest) -> QueryResponse {
        let query = request.query.clone();
        match self.execute(request).await {
            Ok(outcome) => Self::respond(outcome),
            Err(e) => {
                tracing::error!(query = %query, error = %e, "query processing failed");
                QueryResponse::processing_error(query, e.to_string())
            }
        }
    }

    /// Run the retrieval and synthesis pipeline.
    pub async fn execute(&self, request: QueryRequest) -> RagResult<QueryOutcome> {
        let top_k = request.top_k.unwrap_or(self.defaults.top_k);
        let min_score = request.min_score.unwrap_or(self.defaults.min_score);
        tracing::info!(query = %request.query, top_k, min_score, "retrieving");
        let retrieval = self
            .retriever
            .retrieve(&request.query, top_k, min_score)
            .await?;

        if retrieval.matches.is_empty() {
            tracing::info!(query = %request.query, "no relevant matches");
            return Ok(QueryOutcome {
                query: request.query,
                matches: Vec::new(),
                answer: FALLBACK_MESSAGE.to_string(),
                found: false,
                source_url: None,
            });
        }

        tracing::debug!(matches = retrieval.matches.len(), "assembling context");
        let context = assemble_context(&retrieval.matches);

        let answer = self
            .synthesizer
            .synthesize(&context, &request.query)
            .await?;

        // The model can decline even with retrieved context; a declined
        // answer must not carry a source attribution.
        let declined = answer.trim() == FALLBACK_MESSAGE;
        let source_url = if declined {
            None
        } else {
            retrieval.top_source.filter(|s| is_absolute_http_url(s))
        };

        Ok(QueryOutcome {
            query: request.query,
            matches: retrieval.matches,
            answer,
            found: true,
            source_url,
        })
    }

    fn respond(outcome: QueryOutcome) -> QueryResponse {
        if outcome.found {
            QueryResponse::answered(outcome.query, outcome.answer, outcome.source_url)
        } else {
            QueryResponse::not_found(outcome.query)
        }
    }
}

/// A source is attributable only when it is an absolute http(s) URL; bare
/// filenames stay out of the response.
fn is_absolute_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
