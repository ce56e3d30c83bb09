//! Answer synthesizer port.
//!
//! External language-model collaborator. Invoked with the fixed system
//! instruction plus assembled context and the original question; returns
//! free-text answer.

use async_trait::async_trait;

use crate::domain::errors::RagResult;

/// Trait for language-model answer synthesis.
#[async_trait]
pub trait AnswerSynthesizer: Send + Sync {
    /// Generate an answer grounded in `context` for `question`.
    ///
    /// The returned text is trimmed. Implementations instruct the model to
    /// reply with the literal fallback message when the context is
    /// insufficient.
    async fn synthesize(&self, context: &str, question: &str) -> RagResult<String>;
}
