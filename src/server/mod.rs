//! HTTP surface of the admissions assistant.
//!
//! # Endpoints
//!
//! - `GET  /`            — Landing page
//! - `POST /ask`         — Answer a question
//! - `GET  /suggestions` — Starter questions
//! - `GET  /health`      — Liveness check

pub mod pages;
pub mod routes;

pub use routes::{app_router, AppState, AskRequest, AskResponse};
