//! Blocking client for the Cohere v2 chat endpoint.
//!
//! One request per review, single user-role message, no streaming. The
//! `ChatModel` trait is the seam between the classification pipeline and
//! the transport, so tests can substitute a canned model.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "COHERE_API_KEY";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "command-a-03-2025";

const DEFAULT_BASE_URL: &str = "https://api.cohere.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Errors from the remote model boundary
#[derive(Debug, Error)]
pub enum CohereError {
    #[error("{API_KEY_ENV} environment variable is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cohere API error: HTTP {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Model response contained no text content")]
    EmptyResponse,
}

/// A single-turn text-generation backend.
pub trait ChatModel {
    /// Send `prompt` as one user message and return the generated text.
    fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CohereError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

// Serde: v2 chat content blocks; only `text` blocks carry the answer
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Synchronous Cohere chat client.
#[derive(Debug)]
pub struct CohereClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CohereClient {
    /// Create a client with an explicit credential.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, CohereError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        })
    }

    /// Create a client from the `COHERE_API_KEY` environment variable.
    /// A missing or empty variable is a fatal configuration error.
    pub fn from_env(model: impl Into<String>) -> Result<Self, CohereError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(CohereError::MissingApiKey)?;
        Self::new(api_key, model)
    }

    /// Point the client at a different endpoint (local gateways, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatModel for CohereClient {
    fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CohereError> {
        let url = format!("{}/v2/chat", self.base_url.trim_end_matches('/'));

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CohereError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json()?;

        // First text block is the full model answer
        let text = completion
            .message
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or(CohereError::EmptyResponse)?;

        if text.is_empty() {
            return Err(CohereError::EmptyResponse);
        }

        Ok(text)
    }
}
