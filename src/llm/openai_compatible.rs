// ABOUTME: Generic OpenAI-compatible provider for cloud and local chat completion endpoints
// ABOUTME: Non-streaming /chat/completions client mapping failures onto CompletionError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # `OpenAI`-Compatible Provider
//!
//! Works with any endpoint implementing the `OpenAI` chat completions API
//! (`OpenAI`, Ollama, vLLM, `LocalAI`). Configured through
//! `OPENAI_COMPAT_BASE_URL`, `OPENAI_COMPAT_MODEL`, and the optional
//! `OPENAI_COMPAT_API_KEY`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{body_preview, ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::OpenAiSettings;
use crate::constants::http;
use crate::errors::{AppError, CompletionError};

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(settings: OpenAiSettings, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, settings })
    }

    /// Model sent with every request
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.settings.model
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.settings.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI-compatible"
    }

    #[instrument(skip(self, request), fields(model = %self.settings.model))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let openai_request = OpenAiRequest {
            model: &self.settings.model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            stream: false,
        };
        debug!(
            "Sending chat completion request with {} messages",
            openai_request.messages.len()
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {e}", self.settings.base_url);
                CompletionError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            CompletionError::decode(format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body: body_preview(&body, http::ERROR_BODY_PREVIEW_CHARS),
            });
        }

        let parsed: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {e}");
            CompletionError::decode(format!("Failed to parse response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::decode("API returned no choices"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| CompletionError::decode("Choice has no message content"))?;

        debug!(
            "Received {} chars, finish_reason: {:?}",
            content.chars().count(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: parsed.model,
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
