// ABOUTME: Main library entry point for the supplement advisor report pipeline
// ABOUTME: Wires the completion transport, report generation service, and structuring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![deny(unsafe_code)]

//! # Supplement Advisor
//!
//! Requests a personalized supplementation report from a remote completion
//! endpoint and turns the free text into typed supplement records.
//!
//! ## Architecture
//!
//! - **llm**: Transport to the completion endpoint behind the `LlmProvider` trait
//! - **services**: Report generation with retry, backoff, and offline fallback
//! - **structuring**: Re-export of the `advisor-structuring` parsing engine
//! - **config**: Environment-only configuration
//! - **logging**: Structured logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use supplement_advisor::config::AdvisorConfig;
//! use supplement_advisor::errors::AppResult;
//! use supplement_advisor::llm::{prompts::build_report_prompt, ChatProvider};
//! use supplement_advisor::models::UserProfile;
//! use supplement_advisor::services::ReportGenerator;
//! use supplement_advisor::structuring::parse_report_content;
//!
//! async fn run(profile: &UserProfile) -> AppResult<()> {
//!     let config = AdvisorConfig::from_env()?;
//!     let provider = ChatProvider::from_config(&config)?;
//!     let generator = ReportGenerator::new(&provider, config.retry_policy);
//!
//!     let prompt = build_report_prompt(profile);
//!     let result = generator.generate_report(&prompt, profile, None).await;
//!     let parsed = parse_report_content(&result.content);
//!     println!("{} supplements ({})", parsed.supplements.len(), result.source.as_str());
//!     Ok(())
//! }
//! ```

/// Environment-only configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Completion transport and prompt construction
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Report generation, fallback synthesis, and single-shot chat
pub mod services;

pub use advisor_core::{constants, models};

/// Content structuring engine
pub mod structuring {
    pub use advisor_structuring::*;
}
