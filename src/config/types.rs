// ABOUTME: Configuration type definitions for provider selection
// ABOUTME: Contains the LlmProviderType enum and its environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Completion backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// The application's hosted `{"message"}` → `{"reply"}` endpoint (default)
    #[default]
    Endpoint,
    /// Any `OpenAI`-compatible `/chat/completions` endpoint
    OpenAi,
}

impl LlmProviderType {
    /// Environment variable name for provider selection
    pub const ENV_VAR: &'static str = "ADVISOR_LLM_PROVIDER";

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "openai" | "openai-compatible" | "openai_compatible" | "local" | "ollama" => {
                Self::OpenAi
            }
            _ => Self::Endpoint,
        }
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Endpoint => write!(f, "endpoint"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}
