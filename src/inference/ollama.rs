//! Ollama `/api/generate` client.
//!
//! Sends one non-streaming completion request per call. There is no retry
//! loop; a call either finishes inside the configured timeout or fails.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::InferenceBackend;
use crate::config::InferenceConfig;
use crate::error::InferenceError;

/// Answer used when the backend replies without a `response` field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub temperature: f32,
}

/// Answer text from a generate response body.
///
/// A missing `response` field yields the placeholder. A body that is not an
/// object, or a `response` that is not a string (`null` included), is rejected.
pub fn answer_from_body(body: &Value) -> Result<String, InferenceError> {
    let fields = body
        .as_object()
        .ok_or_else(|| InferenceError::Decode(format!("expected a JSON object, got {body}")))?;
    match fields.get("response") {
        None => Ok(NO_RESPONSE_PLACEHOLDER.to_string()),
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(other) => Err(InferenceError::Decode(format!(
            "`response` is not a string: {other}"
        ))),
    }
}

/// Client for a locally hosted Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: InferenceConfig,
}

impl OllamaClient {
    /// Create a client whose every request is bounded by `config.timeout`.
    pub fn new(config: InferenceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            url = %self.config.url,
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending generate request"
        );

        let response = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(InferenceError::Connect)?;

        // Only a plain 200 carries an answer.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(%status, "inference backend returned failure status");
            return Err(InferenceError::Status(status));
        }

        // The timeout also covers reading the body; a stall there is still
        // an unreachable backend rather than a bad payload.
        let text = response.text().await.map_err(InferenceError::Connect)?;
        let parsed: Value = serde_json::from_str(&text).map_err(|e| {
            InferenceError::Decode(format!(
                "{} - Body: {}",
                e,
                &text[..floor_char_boundary(&text, 500)]
            ))
        })?;

        answer_from_body(&parsed)
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client_for(url: String) -> OllamaClient {
        client_with_timeout(url, Duration::from_secs(5))
    }

    fn client_with_timeout(url: String, timeout: Duration) -> OllamaClient {
        OllamaClient::new(InferenceConfig {
            url,
            timeout,
            ..InferenceConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_expected_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/generate")
                    .json_body(serde_json::json!({
                        "model": "llama3",
                        "prompt": "Why Rust?",
                        "stream": false,
                        "temperature": 0.3,
                    }));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"response": "  Because.  ", "done": true}));
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let answer = client.generate("Why Rust?").await.unwrap();

        mock.assert_async().await;
        assert_eq!(answer, "Because.");
    }

    #[tokio::test]
    async fn test_missing_response_field_uses_placeholder() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200).json_body(serde_json::json!({"done": true}));
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let answer = client.generate("anything").await.unwrap();
        assert_eq!(answer, NO_RESPONSE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_failure_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(500).body("model not loaded");
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(
            err,
            InferenceError::Status(s) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200).body("<html>proxy error</html>");
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let err = client.generate("anything").await.unwrap_err();
        match err {
            InferenceError::Decode(msg) => assert!(msg.contains("proxy error")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Nothing listens on port 1.
        let client = client_for("http://127.0.0.1:1/api/generate".to_string());
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, InferenceError::Connect(_)));
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(201)
                    .json_body(serde_json::json!({"response": "Created answer"}));
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(
            err,
            InferenceError::Status(s) if s == reqwest::StatusCode::CREATED
        ));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200)
                    .delay(Duration::from_secs(3))
                    .json_body(serde_json::json!({"response": "too late"}));
            })
            .await;

        let client =
            client_with_timeout(server.url("/api/generate"), Duration::from_millis(300));
        let err = client.generate("anything").await.unwrap_err();
        match err {
            InferenceError::Connect(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
            other => panic!("expected connect error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_response_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200).json_body(serde_json::json!({"response": null}));
            })
            .await;

        let client = client_for(server.url("/api/generate"));
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, InferenceError::Decode(ref m) if m.contains("null")));
    }

    #[test]
    fn test_answer_from_body() {
        let body = serde_json::json!({"response": "\n Short answer. \n"});
        assert_eq!(answer_from_body(&body).unwrap(), "Short answer.");

        let body = serde_json::json!({"done": true});
        assert_eq!(answer_from_body(&body).unwrap(), NO_RESPONSE_PLACEHOLDER);

        let body = serde_json::json!({"response": 42});
        assert!(matches!(answer_from_body(&body), Err(InferenceError::Decode(_))));

        let body = serde_json::json!(["response"]);
        assert!(matches!(answer_from_body(&body), Err(InferenceError::Decode(_))));
    }

    #[test]
    fn test_floor_char_boundary() {
        assert_eq!(floor_char_boundary("abc", 500), 3);
        let s = "é".repeat(300);
        let idx = floor_char_boundary(&s, 500);
        assert!(s.is_char_boundary(idx));
        assert!(idx <= 500);
    }
}
