//! Gemini answer synthesis adapter.
//!
//! Calls the `generateContent` endpoint of the Google generative language
//! API with the fixed system instruction and the assembled document
//! context. One HTTP call per answer; failures surface as
//! [`RagError::AnswerSynthesis`] with no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::GeminiConfig;
use crate::domain::ports::AnswerSynthesizer;
use crate::services::prompts;

/// Gemini-backed implementation of the answer synthesizer port.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> RagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagError::AnswerSynthesis(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl AnswerSynthesizer for GeminiClient {
    async fn synthesize(&self, context: &str, question: &str) -> RagResult<String> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: prompts::SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompts::document_answer_prompt(context, question),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::AnswerSynthesis(format!("generation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(RagError::AnswerSynthesis(format!(
                "generation API returned {status}: {body}"
            )));
        }

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            RagError::AnswerSynthesis(format!("failed to parse generation response: {e}"))
        })?;

        let answer = result
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| RagError::AnswerSynthesis("no candidates in response".to_string()))?;

        Ok(answer.trim().to_string())
    }
}

// -- Wire types --

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<Part>,
}
