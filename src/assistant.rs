//! Question answering: validation, quick answers, then the model.

use std::sync::Arc;

use crate::error::AskError;
use crate::inference::{build_prompt, InferenceBackend};
use crate::quick_answers::QuickAnswerMatcher;

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Quick,
    Model,
}

/// An answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Answers admissions questions from the quick table or, failing that, the
/// inference backend grounded on the admissions context.
#[derive(Clone)]
pub struct AdmissionsAssistant {
    matcher: QuickAnswerMatcher,
    context: Arc<str>,
    backend: Arc<dyn InferenceBackend>,
}

impl AdmissionsAssistant {
    pub fn new(
        matcher: QuickAnswerMatcher,
        context: Arc<str>,
        backend: Arc<dyn InferenceBackend>,
    ) -> Self {
        Self {
            matcher,
            context,
            backend,
        }
    }

    /// Answer `question`.
    ///
    /// Blank questions are rejected before anything else runs. A quick-table
    /// hit never reaches the backend.
    pub async fn answer(&self, question: &str) -> Result<Answer, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        if let Some(rule) = self.matcher.find(question) {
            tracing::debug!(keyword = rule.keyword, "quick answer hit");
            return Ok(Answer {
                text: rule.answer.to_string(),
                source: AnswerSource::Quick,
            });
        }

        tracing::info!(
            backend = self.backend.name(),
            question_chars = question.len(),
            "no quick answer, asking model"
        );
        let prompt = build_prompt(&self.context, question);
        let text = self.backend.generate(&prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "model fallback failed");
            AskError::from(e)
        })?;

        Ok(Answer {
            text,
            source: AnswerSource::Model,
        })
    }
}

impl std::fmt::Debug for AdmissionsAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionsAssistant")
            .field("rules", &self.matcher.rules().len())
            .field("context_chars", &self.context.len())
            .field("backend", &self.backend.name())
            .finish()
    }
}
