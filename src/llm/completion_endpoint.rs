// ABOUTME: Provider for the application's hosted completion endpoint
// ABOUTME: POSTs {"message"} and expects {"reply"}, mapping failures onto CompletionError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Completion Endpoint Provider
//!
//! The hosted endpoint accepts a single user message and answers with a
//! single reply:
//!
//! ```text
//! POST <url>   {"message": "<user message>"}
//! 200 OK       {"reply": "<text>"}
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::{body_preview, ChatRequest, ChatResponse, LlmProvider};
use crate::constants::{http, service_names};
use crate::errors::{AppError, CompletionError};

#[derive(Debug, Serialize)]
struct EndpointRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct EndpointResponse {
    reply: Option<String>,
}

/// Client for the hosted `{"message"}` → `{"reply"}` endpoint
pub struct CompletionEndpointProvider {
    client: Client,
    url: String,
}

impl CompletionEndpointProvider {
    /// Create a provider with the default request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        Self::with_timeout(url, Duration::from_secs(http::DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with an explicit request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LlmProvider for CompletionEndpointProvider {
    fn name(&self) -> &'static str {
        "endpoint"
    }

    fn display_name(&self) -> &'static str {
        service_names::COMPLETION_ENDPOINT
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let message = request.last_user_message().unwrap_or_default();
        debug!(
            "Sending {} chars to {}",
            message.chars().count(),
            service_names::COMPLETION_ENDPOINT
        );

        let response = self
            .client
            .post(&self.url)
            .json(&EndpointRequest { message })
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to completion endpoint: {e}");
                CompletionError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read completion endpoint response: {e}");
            CompletionError::decode(format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body: body_preview(&body, http::ERROR_BODY_PREVIEW_CHARS),
            });
        }

        let decoded: EndpointResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse completion endpoint response: {e}");
            CompletionError::decode(format!("Failed to parse response: {e}"))
        })?;

        let reply = decoded
            .reply
            .ok_or_else(|| CompletionError::decode("Response has no reply field"))?;

        debug!("Received {} chars from completion endpoint", reply.chars().count());
        Ok(ChatResponse::text(reply))
    }
}
