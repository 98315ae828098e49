//! # Admissions Assistant
//!
//! A small web backend that answers university-admissions questions. Common
//! questions are answered from a fixed keyword table; everything else is
//! sent, together with an admissions context document, to a locally hosted
//! Ollama model.

pub mod assistant;
pub mod config;
pub mod error;
pub mod inference;
pub mod quick_answers;
pub mod server;
pub mod suggestions;

pub use assistant::{AdmissionsAssistant, Answer, AnswerSource};
pub use config::{AppConfig, InferenceConfig};
pub use error::{AskError, ConfigError, InferenceError};
pub use inference::{InferenceBackend, OllamaClient};
pub use quick_answers::{QuickAnswerMatcher, QuickRule, QUICK_RULES};

/// Crate version reported by `/health` and the landing page.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
