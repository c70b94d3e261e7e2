// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Retry policy defaults, content thresholds, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! Constants module
//!
//! The report policy values below have no documented product rationale.
//! They are kept as named, overridable defaults and should go through
//! product review before being tuned.

/// Report generation policy defaults
pub mod report {
    /// Maximum number of sequential completion attempts per report
    pub const MAX_RETRIES: u32 = 3;
    /// Backoff delay before the second attempt, doubled for each further attempt
    pub const BASE_DELAY_MS: u64 = 1000;
    /// Upper bound for a single backoff delay
    pub const MAX_DELAY_MS: u64 = 8000;
    /// Replies shorter than this many characters count as insufficient content
    pub const MIN_CONTENT_CHARS: usize = 100;
}

/// Progress messages surfaced to the presentation layer
pub mod progress {
    /// Emitted before every completion attempt
    pub const GENERATING: &str = "Generating personalized report…";
    /// Emitted when every attempt failed and the offline synthesizer takes over
    pub const FALLBACK: &str = "Generating basic recommendations…";

    /// Status emitted before sleeping between attempts
    #[must_use]
    pub fn retrying(attempt: u32, max_retries: u32) -> String {
        format!("Retrying… ({attempt}/{max_retries})")
    }
}

/// Service identifiers used in logging
pub mod service_names {
    /// Root service name
    pub const SUPPLEMENT_ADVISOR: &str = "supplement-advisor";
    /// Hosted completion endpoint, as named in error messages
    pub const COMPLETION_ENDPOINT: &str = "Completion endpoint";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout for completion calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Maximum number of body characters kept in error diagnostics
    pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;
}
