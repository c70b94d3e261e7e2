// ABOUTME: Core types and constants for the supplement advisor report pipeline
// ABOUTME: Foundation crate with error handling, domain models, and retry policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![deny(unsafe_code)]

//! # Advisor Core
//!
//! Foundation crate providing shared types and constants for the supplement
//! advisor. Both the structuring engine and the report generation service
//! depend on it, so it is kept small and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the retryable `CompletionError` taxonomy
//! - **constants**: Retry/backoff policy defaults and service identifiers
//! - **models**: `UserProfile`, `ReportResult`, `SupplementInfo`, `ParsedReport`

/// Unified error handling with standard error codes
pub mod errors;

/// Policy constants organized by domain
pub mod constants;

/// Domain models consumed and produced by the report pipeline
pub mod models;
