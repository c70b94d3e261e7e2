// ABOUTME: LLM provider abstraction layer for the report completion transport
// ABOUTME: Defines the LlmProvider contract and the role-based chat message types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # LLM Provider Interface
//!
//! Every backend implements [`LlmProvider`]. Each call is a single attempt:
//! retries, backoff, and fallback are layered on top by
//! `services::report_generation`.
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use supplement_advisor::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("¿Qué es la creatina?")]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod completion_endpoint;
mod openai_compatible;
pub mod prompts;
mod provider;

pub use completion_endpoint::CompletionEndpointProvider;
pub use openai_compatible::OpenAiCompatibleProvider;
pub use provider::ChatProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::CompletionError;

// ============================================================================
// Message Types
// ============================================================================

/// Sender of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions framing the exchange
    System,
    /// The report prompt or chat question
    User,
}

impl MessageRole {
    /// Wire name used by chat-completions APIs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// One message of a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender
    pub role: MessageRole,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// Build a message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Build a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Input of a single completion attempt
///
/// The hosted endpoint accepts one message and reads
/// [`ChatRequest::last_user_message`]; chat-completions backends send the
/// whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Messages in order
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Request from an explicit message list
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Request carrying a single user message
    #[must_use]
    pub fn from_user_message(content: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::user(content)])
    }

    /// Content of the last user message, if any
    #[must_use]
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Decoded reply of one attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text
    pub content: String,
    /// Model used for generation, when the backend reports it
    pub model: Option<String>,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Why generation stopped, when reported
    pub finish_reason: Option<String>,
}

impl ChatResponse {
    /// Response carrying only text
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: None,
            usage: None,
            finish_reason: None,
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Backend able to answer a [`ChatRequest`]
///
/// One call is one attempt. Implementations map every failure onto a
/// [`CompletionError`] variant and never retry internally.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short identifier used in logs and span fields
    fn name(&self) -> &'static str;

    /// Name shown to people
    fn display_name(&self) -> &'static str;

    /// Run one completion attempt
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError>;
}

/// Keep at most `max_chars` characters of an error body
pub(crate) fn body_preview(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
