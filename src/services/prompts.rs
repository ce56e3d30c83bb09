//! Prompt templates for document-grounded answering.
//!
//! `FALLBACK_MESSAGE` is the single authoritative constant: the synthesis
//! prompt instructs the model to reply with it verbatim when the context
//! is insufficient, and the orchestrator detects a declined answer by
//! comparing against it.

/// Fixed text returned when no sufficiently relevant content is found.
pub const FALLBACK_MESSAGE: &str =
    "I could not find any relevant information to answer that question in the provided documents.";

/// System instruction for the answer synthesizer.
pub const SYSTEM_PROMPT: &str = "You are a helpful and professional assistant. \
Answer user questions using only the information provided in the context documents. \
Do not use external knowledge or make assumptions beyond the given context. \
If the answer is not found in the documents, state that clearly.";

/// Build the per-query answering prompt from assembled context and the
/// user's question.
pub fn document_answer_prompt(context: &str, question: &str) -> String {
    format!(
        "Instructions:\n\
         - Carefully read all DOCUMENTS provided in the context.\n\
         - Use relevant information from the documents to answer the user's question.\n\
         - If multiple documents are relevant, combine their information for a complete answer.\n\
         - Do not mention document numbers, titles, or sources in your answer.\n\
         - If the answer is not found in any document, reply with: {FALLBACK_MESSAGE}\n\
         - Do not include introductory phrases; answer the question directly.\n\n\
         Context:\n{context}\n\n\
         Question:\n{question}\n"
    )
}
