// ABOUTME: Report generation output and retry policy models
// ABOUTME: ReportResult records whether the text came from the model or the offline fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::report;

/// Origin of a report's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    /// Authored by the remote completion endpoint
    Ai,
    /// Synthesized offline from the profile
    Fallback,
}

impl ReportSource {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of one report generation call
///
/// `content` is always safe to display as-is. `error` is informational and
/// must not drive control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResult {
    /// Always `true`: generation degrades to the fallback instead of failing
    pub success: bool,
    /// Report text
    pub content: String,
    /// Where the text came from
    pub source: ReportSource,
    /// Diagnostic for fallback results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportResult {
    /// Result carrying a model-authored reply
    #[must_use]
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            source: ReportSource::Ai,
            error: None,
        }
    }

    /// Result carrying synthesized content plus the reason the model was not used
    #[must_use]
    pub fn fallback(content: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            source: ReportSource::Fallback,
            error: Some(diagnostic.into()),
        }
    }
}

/// Retry, backoff, and validity policy for report generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (not additional retries)
    pub max_retries: u32,
    /// Delay after the first failed attempt
    pub base_delay_ms: u64,
    /// Cap on any single delay
    pub max_delay_ms: u64,
    /// Minimum reply length in characters
    pub min_content_chars: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: report::MAX_RETRIES,
            base_delay_ms: report::BASE_DELAY_MS,
            max_delay_ms: report::MAX_DELAY_MS,
            min_content_chars: report::MIN_CONTENT_CHARS,
        }
    }
}

impl RetryPolicy {
    /// Backoff after failed attempt `attempt` (1-based): `min(base * 2^(attempt-1), max)`
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63);
        let factor = 1_u64.checked_shl(exponent).unwrap_or(u64::MAX);
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }

    /// Policy with all delays set to zero, convenient for tests and batch tools
    #[must_use]
    pub const fn without_delays(mut self) -> Self {
        self.base_delay_ms = 0;
        self.max_delay_ms = 0;
        self
    }
}
