//! LLM client: the single point of entry for all generation endpoint calls.
//!
//! Talks to an Ollama-compatible `/api/generate` endpoint. One request per call:
//! no streaming, no retries, default HTTP client timeouts.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod parse;
pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Reply does not match the expected schema: {0}")]
    Schema(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Output-format hint understood by the generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Generation client shared by every task. Cheap to clone.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl LlmClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// The model used when a caller does not name one.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests one completion from the default model.
    pub async fn generate(
        &self,
        prompt: &str,
        format: Option<OutputFormat>,
    ) -> Result<String, LlmError> {
        self.generate_with(&self.model, prompt, format).await
    }

    /// Requests one non-streaming completion and returns the raw reply text.
    pub async fn generate_with(
        &self,
        model: &str,
        prompt: &str,
        format: Option<OutputFormat>,
    ) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model,
            prompt,
            stream: false,
            format,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply.response.ok_or(LlmError::EmptyContent)?;

        debug!(model, chars = text.len(), "Generation call succeeded");
        Ok(text)
    }

    /// Calls the model in JSON mode and deserializes the (possibly fenced) reply.
    pub async fn generate_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let text = self.generate(prompt, Some(OutputFormat::Json)).await?;
        Ok(parse::parse_json(&text)?)
    }
}
