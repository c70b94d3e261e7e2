// ABOUTME: Report generation service with sequential retries, exponential backoff, and fallback
// ABOUTME: Never fails: exhausting the retry budget yields a synthesized fallback report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Report Generation
//!
//! Each attempt is one call to the configured [`LlmProvider`]. A reply that
//! decodes but is shorter than the policy's `min_content_chars` counts as a
//! failed attempt. After the last failed attempt the offline synthesizer
//! produces the report instead.

use tokio::time::sleep;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::fallback::synthesize_fallback_report;
use crate::constants::progress;
use crate::errors::CompletionError;
use crate::llm::{ChatRequest, LlmProvider};
use crate::models::{ReportResult, RetryPolicy, UserProfile};

/// Receives user-facing status updates during generation
///
/// Purely informational: reporters cannot influence the pipeline.
pub trait ProgressReporter: Send + Sync {
    /// Called with a status message and, when relevant, the attempt number
    fn report(&self, status: &str, attempt: Option<u32>);
}

impl<F> ProgressReporter for F
where
    F: Fn(&str, Option<u32>) + Send + Sync,
{
    fn report(&self, status: &str, attempt: Option<u32>) {
        self(status, attempt);
    }
}

/// Report generator bound to a provider and a retry policy
pub struct ReportGenerator<'a> {
    provider: &'a dyn LlmProvider,
    policy: RetryPolicy,
}

impl<'a> ReportGenerator<'a> {
    /// Create a generator
    #[must_use]
    pub fn new(provider: &'a dyn LlmProvider, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    /// Generate a report for `profile` from `prompt`
    ///
    /// Always returns a displayable result. `source` tells whether the text
    /// came from the provider or from the fallback synthesizer.
    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), provider = self.provider.name())
    )]
    pub async fn generate_report(
        &self,
        prompt: &str,
        profile: &UserProfile,
        on_progress: Option<&dyn ProgressReporter>,
    ) -> ReportResult {
        let max_retries = self.policy.max_retries.max(1);
        let request = ChatRequest::from_user_message(prompt);
        let mut last_error: Option<CompletionError> = None;

        for attempt in 1..=max_retries {
            notify(on_progress, progress::GENERATING, Some(attempt));

            match self.attempt(&request).await {
                Ok(content) => {
                    info!(
                        attempt,
                        chars = content.chars().count(),
                        "Report generated by provider"
                    );
                    return ReportResult::ai(content);
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_retries,
                        kind = e.kind(),
                        "Report attempt {attempt}/{max_retries} failed: {e}"
                    );
                    last_error = Some(e);

                    if attempt < max_retries {
                        let delay = self.policy.delay_for_attempt(attempt);
                        notify(
                            on_progress,
                            &progress::retrying(attempt, max_retries),
                            Some(attempt),
                        );
                        sleep(delay).await;
                    }
                }
            }
        }

        notify(on_progress, progress::FALLBACK, None);
        let diagnostic = last_error.map_or_else(
            || format!("No usable reply after {max_retries} attempts"),
            |e| format!("All {max_retries} attempts failed; last error: {e}"),
        );
        warn!("Falling back to offline report: {diagnostic}");
        ReportResult::fallback(synthesize_fallback_report(profile), diagnostic)
    }

    /// One provider call plus the content threshold check
    async fn attempt(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        let response = self.provider.complete(request).await?;
        let length = response.content.chars().count();
        if length < self.policy.min_content_chars {
            return Err(CompletionError::InsufficientContent {
                length,
                required: self.policy.min_content_chars,
            });
        }
        Ok(response.content)
    }
}

fn notify(reporter: Option<&dyn ProgressReporter>, status: &str, attempt: Option<u32>) {
    if let Some(reporter) = reporter {
        reporter.report(status, attempt);
    }
}

/// Generate a report with the default [`RetryPolicy`]
pub async fn generate_report(
    provider: &dyn LlmProvider,
    prompt: &str,
    profile: &UserProfile,
    on_progress: Option<&dyn ProgressReporter>,
) -> ReportResult {
    ReportGenerator::new(provider, RetryPolicy::default())
        .generate_report(prompt, profile, on_progress)
        .await
}
