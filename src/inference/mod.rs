//! Model fallback for questions the quick-answer table does not cover.
//!
//! The backend is a trait so the request path can run against the real Ollama
//! client in production and an in-process stub in tests.

pub mod ollama;

use async_trait::async_trait;

use crate::error::InferenceError;

pub use ollama::{answer_from_body, GenerateRequest, OllamaClient, NO_RESPONSE_PLACEHOLDER};

/// A text-generation service that turns a prompt into an answer.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &str;

    /// Generate a single, complete answer for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Build the prompt sent to the model for an unmatched question.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a university admissions assistant. Answer BRIEFLY and CONCISELY (1-3 sentences max).\n\
         \n\
         Admission Info:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer briefly:"
    )
}
