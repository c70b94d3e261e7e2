// ABOUTME: Error taxonomy for calls to the remote text-completion endpoint
// ABOUTME: Every variant is retryable and is absorbed into a fallback report on exhaustion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

/// Failure of a single completion attempt.
///
/// The report generation service treats all variants as retryable. Once the
/// retry budget is spent the last error only survives as the diagnostic
/// string attached to the fallback `ReportResult`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// The request could not be sent or the connection failed
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying transport message
        message: String,
    },

    /// The endpoint answered with a non-success status code
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the endpoint
        status: u16,
        /// Truncated response body
        body: String,
    },

    /// The response body could not be decoded into a reply
    #[error("Decode error: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },

    /// The reply decoded fine but is too short to be a usable report
    #[error("Insufficient content: reply has {length} characters, at least {required} required")]
    InsufficientContent {
        /// Character count of the reply
        length: usize,
        /// Configured minimum
        required: usize,
    },
}

impl CompletionError {
    /// Build a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Short machine-friendly label used in structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode { .. } => "decode",
            Self::InsufficientContent { .. } => "insufficient_content",
        }
    }
}
