// ABOUTME: Domain service layer for report generation and single-shot chat
// ABOUTME: Hosts the retrying report generator, the offline fallback synthesizer, and ask_once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! Domain service layer
//!
//! Services borrow an [`LlmProvider`](crate::llm::LlmProvider) and hold no
//! state across calls.

/// Single completion call without retry or fallback
pub mod chat;

/// Deterministic offline report synthesis
pub mod fallback;

/// Retrying report generation with backoff and fallback
pub mod report_generation;

pub use chat::ask_once;
pub use fallback::synthesize_fallback_report;
pub use report_generation::{generate_report, ProgressReporter, ReportGenerator};
