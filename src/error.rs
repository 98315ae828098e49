//! Error types for the admissions assistant.
//!
//! Every failure on the `/ask` path ends up as an [`AskError`], which knows
//! its HTTP status and renders as `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors raised while talking to the inference backend.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The endpoint could not be reached or did not answer in time.
    #[error("inference backend unreachable: {0}")]
    Connect(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("inference backend returned {0}")]
    Status(reqwest::StatusCode),

    /// The endpoint answered 2xx but the body was not the expected JSON.
    #[error("invalid inference response: {0}")]
    Decode(String),
}

/// Errors surfaced by `POST /ask`.
#[derive(Debug, Error)]
pub enum AskError {
    /// Question absent or blank after trimming.
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// The inference backend is not running or timed out.
    #[error("Cannot connect to AI model. Is Ollama running?")]
    Unavailable,

    /// The inference backend answered with a failure status.
    #[error("Failed to get response from AI model")]
    Upstream(reqwest::StatusCode),

    /// Anything else that went wrong while handling the request.
    #[error("An error occurred: {0}")]
    Internal(String),
}

impl AskError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AskError::EmptyQuestion => StatusCode::BAD_REQUEST,
            AskError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            AskError::Upstream(_) | AskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InferenceError> for AskError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Connect(_) => AskError::Unavailable,
            InferenceError::Status(status) => AskError::Upstream(status),
            InferenceError::Decode(msg) => AskError::Internal(msg),
        }
    }
}

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    /// The admissions context file could not be read.
    #[error("cannot read admissions data from {path}: {source}")]
    ContextFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
