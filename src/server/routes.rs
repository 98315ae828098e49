//! Axum route handlers for the admissions assistant.
//!
//! # Routes
//!
//! - `GET  /`            — Landing page
//! - `POST /ask`         — `{"question": "..."}` → `{"answer": "..."}`
//! - `GET  /suggestions` — Fixed list of starter questions
//! - `GET  /health`      — Returns `{"status": "ok", "version": "..."}`

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tera::Tera;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::pages;
use crate::assistant::AdmissionsAssistant;
use crate::config::AppConfig;
use crate::error::AskError;
use crate::inference::{InferenceBackend, OllamaClient};
use crate::quick_answers::QuickAnswerMatcher;
use crate::suggestions::{suggestion_list, SuggestionList};

/// Shared application state for the HTTP server.
///
/// Everything in here is read-only once the server is up.
#[derive(Clone)]
pub struct AppState {
    /// Answers questions.
    pub assistant: AdmissionsAssistant,
    /// Landing page templates.
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Build the production state: built-in quick rules and an Ollama backend.
    pub fn new(config: &AppConfig, context: Arc<str>) -> anyhow::Result<Self> {
        let backend = OllamaClient::new(config.inference.clone())?;
        Self::with_backend(context, Arc::new(backend))
    }

    /// Build state around an arbitrary inference backend.
    pub fn with_backend(
        context: Arc<str>,
        backend: Arc<dyn InferenceBackend>,
    ) -> anyhow::Result<Self> {
        let assistant = AdmissionsAssistant::new(QuickAnswerMatcher::default(), context, backend);
        Ok(Self {
            assistant,
            templates: Arc::new(pages::load_templates()?),
        })
    }
}

/// Body of `POST /ask`. A missing `question` is treated as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// Successful `POST /ask` response.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/ask", post(ask_handler))
        .route("/suggestions", get(suggestions_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / — landing page.
async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    pages::render_index(&state.templates).map(Html).map_err(|e| {
        tracing::error!(error = %e, "failed to render landing page");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// POST /ask — answer one question.
///
/// A body that is not a JSON object with a string `question` is reported as
/// an internal failure carrying the parse error.
async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AskError> {
    let Json(request) = payload.map_err(|rejection| AskError::Internal(rejection.body_text()))?;

    let answer = state.assistant.answer(&request.question).await?;
    tracing::debug!(source = ?answer.source, "answered question");

    Ok(Json(AskResponse {
        answer: answer.text,
    }))
}

/// GET /suggestions — fixed starter questions.
async fn suggestions_handler() -> Json<SuggestionList> {
    Json(suggestion_list())
}

/// GET /health — liveness check.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "admissions-assistant",
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
