// ABOUTME: Unified LLM provider selector for runtime backend switching
// ABOUTME: Wraps the hosted completion endpoint or an OpenAI-compatible backend based on configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # LLM Provider Selector
//!
//! Set `ADVISOR_LLM_PROVIDER`:
//! - `endpoint` (default): hosted `{"message"}` → `{"reply"}` endpoint
//! - `openai`: any `OpenAI`-compatible `/chat/completions` endpoint

use async_trait::async_trait;
use std::fmt;
use tracing::info;

use super::{
    ChatRequest, ChatResponse, CompletionEndpointProvider, LlmProvider, OpenAiCompatibleProvider,
};
use crate::config::{AdvisorConfig, LlmProviderType, COMPLETION_ENDPOINT_URL_ENV};
use crate::errors::{AppError, CompletionError};

/// Unified chat provider
pub enum ChatProvider {
    /// Hosted completion endpoint
    Endpoint(CompletionEndpointProvider),
    /// `OpenAI`-compatible backend
    OpenAi(OpenAiCompatibleProvider),
}

impl ChatProvider {
    /// Create a provider from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is missing or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            config.provider,
            LlmProviderType::ENV_VAR
        );

        match config.provider {
            LlmProviderType::Endpoint => {
                let url = config
                    .endpoint_url
                    .as_deref()
                    .ok_or_else(|| AppError::config_missing(COMPLETION_ENDPOINT_URL_ENV))?;
                Ok(Self::Endpoint(CompletionEndpointProvider::with_timeout(
                    url,
                    config.timeout,
                )?))
            }
            LlmProviderType::OpenAi => Ok(Self::OpenAi(OpenAiCompatibleProvider::new(
                config.openai.clone(),
                config.timeout,
            )?)),
        }
    }

    /// Create a provider from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(&AdvisorConfig::from_env()?)
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(p) => f.debug_tuple("ChatProvider::Endpoint").field(&p.url()).finish(),
            Self::OpenAi(p) => f
                .debug_tuple("ChatProvider::OpenAi")
                .field(&p.default_model())
                .finish(),
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Endpoint(p) => p.name(),
            Self::OpenAi(p) => p.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Endpoint(p) => p.display_name(),
            Self::OpenAi(p) => p.display_name(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        match self {
            Self::Endpoint(p) => p.complete(request).await,
            Self::OpenAi(p) => p.complete(request).await,
        }
    }
}
