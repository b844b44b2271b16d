//! OpenAI-compatible chat completions provider.
//!
//! Works against any endpoint exposing `POST {base_url}/chat/completions`
//! with bearer authentication, which covers Google AI Studio's Gemini
//! gateway as well as local OpenAI-compatible servers.

use crate::config::NarrativeConfig;
use crate::error::NarrativeError;
use crate::provider::NarrativeProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER: &str = "chat-completions";

/// Chat completions provider.
pub struct ChatCompletionsProvider {
    client: Client,
    api_key: SecretString,
    config: NarrativeConfig,
}

impl ChatCompletionsProvider {
    /// Creates a provider from configuration.
    ///
    /// # Errors
    /// Returns [`NarrativeError::MissingApiKey`] when no key is configured,
    /// or [`NarrativeError::RequestFailed`] if the HTTP client cannot be
    /// built.
    pub fn new(mut config: NarrativeConfig) -> Result<Self, NarrativeError> {
        let api_key = config.api_key.take().ok_or(NarrativeError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NarrativeError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl NarrativeProvider for ChatCompletionsProvider {
    async fn complete(&self, prompt: &str) -> Result<String, NarrativeError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = self.endpoint();
        tracing::info!(model = %self.config.model, "Requesting narrative audit");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Narrative request failed: {}", e);
                NarrativeError::RequestFailed {
                    provider: PROVIDER.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read narrative response body: {}", e);
            body_read_failed(&e)
        })?;

        tracing::debug!("Narrative response status: {}", status);

        parse_response(status, retry_after, &body)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// A body that cannot be read is a connectivity failure, not a bad payload.
fn body_read_failed(error: &impl std::fmt::Display) -> NarrativeError {
    NarrativeError::RequestFailed {
        provider: PROVIDER.to_string(),
        reason: format!("reading response body: {error}"),
    }
}

/// Maps an HTTP status and body to generated text or a typed failure.
fn parse_response(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> Result<String, NarrativeError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(NarrativeError::AuthFailed {
            provider: PROVIDER.to_string(),
        });
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(NarrativeError::RateLimited {
            provider: PROVIDER.to_string(),
            retry_after,
        });
    }
    if !status.is_success() {
        return Err(NarrativeError::RequestFailed {
            provider: PROVIDER.to_string(),
            reason: format!("HTTP {status}: {body}"),
        });
    }

    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| NarrativeError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: format!("JSON parse error: {e}"),
        })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| NarrativeError::EmptyResponse {
            provider: PROVIDER.to_string(),
        })
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
