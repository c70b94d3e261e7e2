// ABOUTME: Environment-only configuration for the completion transport and retry policy
// ABOUTME: Unset variables fall back to documented defaults; invalid overrides are logged and ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! Configuration module
//!
//! | Variable | Default |
//! |---|---|
//! | `ADVISOR_LLM_PROVIDER` | `endpoint` (`openai` selects the `OpenAI`-compatible backend) |
//! | `COMPLETION_ENDPOINT_URL` | required for `endpoint` |
//! | `OPENAI_COMPAT_BASE_URL` | `https://api.openai.com/v1` |
//! | `OPENAI_COMPAT_API_KEY` | none |
//! | `OPENAI_COMPAT_MODEL` | `gpt-4o-mini` |
//! | `COMPLETION_TIMEOUT_SECS` | 60 |
//! | `REPORT_MAX_RETRIES` | 3 |
//! | `REPORT_BASE_DELAY_MS` | 1000 |
//! | `REPORT_MAX_DELAY_MS` | 8000 |
//! | `REPORT_MIN_CONTENT_CHARS` | 100 |

mod types;

pub use types::LlmProviderType;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use advisor_core::constants::http;
use advisor_core::models::RetryPolicy;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Hosted completion endpoint URL
pub const COMPLETION_ENDPOINT_URL_ENV: &str = "COMPLETION_ENDPOINT_URL";
/// `OpenAI`-compatible base URL
pub const OPENAI_COMPAT_BASE_URL_ENV: &str = "OPENAI_COMPAT_BASE_URL";
/// `OpenAI`-compatible bearer token
pub const OPENAI_COMPAT_API_KEY_ENV: &str = "OPENAI_COMPAT_API_KEY";
/// `OpenAI`-compatible model name
pub const OPENAI_COMPAT_MODEL_ENV: &str = "OPENAI_COMPAT_MODEL";
/// Per-request timeout in seconds
pub const COMPLETION_TIMEOUT_SECS_ENV: &str = "COMPLETION_TIMEOUT_SECS";
/// Retry policy overrides
pub const REPORT_MAX_RETRIES_ENV: &str = "REPORT_MAX_RETRIES";
/// Retry policy overrides
pub const REPORT_BASE_DELAY_MS_ENV: &str = "REPORT_BASE_DELAY_MS";
/// Retry policy overrides
pub const REPORT_MAX_DELAY_MS_ENV: &str = "REPORT_MAX_DELAY_MS";
/// Retry policy overrides
pub const REPORT_MIN_CONTENT_CHARS_ENV: &str = "REPORT_MIN_CONTENT_CHARS";

/// Default `OpenAI`-compatible base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Default `OpenAI`-compatible model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Settings for the `OpenAI`-compatible backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// Model name sent with every request
    pub model: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_owned(),
            api_key: None,
            model: DEFAULT_OPENAI_MODEL.to_owned(),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Selected backend
    pub provider: LlmProviderType,
    /// Hosted completion endpoint URL
    pub endpoint_url: Option<String>,
    /// `OpenAI`-compatible backend settings
    pub openai: OpenAiSettings,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry, backoff, and content threshold policy
    pub retry_policy: RetryPolicy,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderType::default(),
            endpoint_url: None,
            openai: OpenAiSettings::default(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected backend is missing a
    /// required variable.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected backend is missing a
    /// required variable.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let provider = var(LlmProviderType::ENV_VAR)
            .map(|value| LlmProviderType::from_str_or_default(&value))
            .unwrap_or_default();

        let endpoint_url = var(COMPLETION_ENDPOINT_URL_ENV);
        if provider == LlmProviderType::Endpoint && endpoint_url.is_none() {
            return Err(AppError::config_missing(COMPLETION_ENDPOINT_URL_ENV));
        }

        let openai = OpenAiSettings {
            base_url: var(OPENAI_COMPAT_BASE_URL_ENV).unwrap_or(defaults.openai.base_url),
            api_key: var(OPENAI_COMPAT_API_KEY_ENV),
            model: var(OPENAI_COMPAT_MODEL_ENV).unwrap_or(defaults.openai.model),
        };

        let timeout_secs = parse_override(
            &var,
            COMPLETION_TIMEOUT_SECS_ENV,
            http::DEFAULT_TIMEOUT_SECS,
            |secs| *secs > 0,
        );

        let policy = defaults.retry_policy;
        let retry_policy = RetryPolicy {
            max_retries: parse_override(&var, REPORT_MAX_RETRIES_ENV, policy.max_retries, |n| {
                *n > 0
            }),
            base_delay_ms: parse_override(
                &var,
                REPORT_BASE_DELAY_MS_ENV,
                policy.base_delay_ms,
                |_| true,
            ),
            max_delay_ms: parse_override(&var, REPORT_MAX_DELAY_MS_ENV, policy.max_delay_ms, |_| {
                true
            }),
            min_content_chars: parse_override(
                &var,
                REPORT_MIN_CONTENT_CHARS_ENV,
                policy.min_content_chars,
                |_| true,
            ),
        };

        let config = Self {
            provider,
            endpoint_url,
            openai,
            timeout: Duration::from_secs(timeout_secs),
            retry_policy,
        };
        debug!(provider = %config.provider, ?config.retry_policy, "Loaded configuration");
        Ok(config)
    }
}

/// Parse an optional override, keeping `default` when unset or invalid
fn parse_override<T, F, V>(var: &F, key: &str, default: T, is_valid: V) -> T
where
    T: FromStr + Copy + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let Some(raw) = var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if is_valid(&value) => value,
        Ok(value) => {
            warn!("Ignoring out-of-range {key}={value}, using {default}");
            default
        }
        Err(e) => {
            warn!("Ignoring invalid {key}={raw:?} ({e}), using {default}");
            default
        }
    }
}
