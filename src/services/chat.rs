// ABOUTME: Single-shot chat completion used by the floating chat widget
// ABOUTME: One provider call with no retry and no fallback; errors propagate to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use tracing::{debug, instrument};

use crate::errors::{AppError, AppResult};
use crate::llm::{ChatRequest, LlmProvider};

/// Ask one question and return the reply text
///
/// # Errors
///
/// Returns an invalid-input error for a blank question, or the provider
/// failure converted into an `AppError`.
#[instrument(skip_all, fields(provider = provider.name()))]
pub async fn ask_once(provider: &dyn LlmProvider, question: &str) -> AppResult<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::invalid_input("Question must not be empty"));
    }

    let response = provider
        .complete(&ChatRequest::from_user_message(question))
        .await?;
    debug!("Chat reply has {} chars", response.content.chars().count());
    Ok(response.content)
}
