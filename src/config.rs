//! Runtime configuration.
//!
//! Everything is read from environment variables once at startup; the result
//! is immutable and handed to the server as part of its state.
//!
//! # Environment Variables
//!
//! - `HOST` — bind address (default: `127.0.0.1`)
//! - `PORT` — bind port (default: `5000`)
//! - `OLLAMA_URL` — generate endpoint (default: `http://localhost:11434/api/generate`)
//! - `OLLAMA_MODEL` — model identifier (default: `llama3`)
//! - `OLLAMA_TIMEOUT_SECS` — upper bound on one inference call (default: `20`)
//! - `OLLAMA_TEMPERATURE` — sampling temperature (default: `0.3`)
//! - `ADMISSIONS_DATA` — path to the admissions context file (default: `admissions_data.txt`)

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;

/// Default Ollama generate endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
/// Default model served by Ollama.
pub const DEFAULT_MODEL: &str = "llama3";
/// Default bound on an inference call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Low temperature keeps answers focused.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Default location of the admissions context document.
pub const DEFAULT_CONTEXT_PATH: &str = "admissions_data.txt";

/// Settings for the outbound inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceConfig {
    pub url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub inference: InferenceConfig,
    pub context_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            inference: InferenceConfig::default(),
            context_path: DEFAULT_CONTEXT_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source, falling back to
    /// defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var::<u16, _>(&lookup, "PORT")? {
            config.port = port;
        }
        if let Some(url) = lookup("OLLAMA_URL") {
            config.inference.url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            config.inference.model = model;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "OLLAMA_TIMEOUT_SECS")? {
            config.inference.timeout = Duration::from_secs(secs);
        }
        if let Some(temp) = parse_var::<f32, _>(&lookup, "OLLAMA_TEMPERATURE")? {
            if !(0.0..=2.0).contains(&temp) {
                return Err(ConfigError::InvalidValue {
                    var: "OLLAMA_TEMPERATURE",
                    value: temp.to_string(),
                });
            }
            config.inference.temperature = temp;
        }
        if let Some(path) = lookup("ADMISSIONS_DATA") {
            config.context_path = path;
        }

        Ok(config)
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Read the admissions context document.
    pub fn load_context(&self) -> Result<Arc<str>, ConfigError> {
        let text = std::fs::read_to_string(&self.context_path).map_err(|source| {
            ConfigError::ContextFile {
                path: self.context_path.clone(),
                source,
            }
        })?;
        Ok(Arc::from(text))
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
