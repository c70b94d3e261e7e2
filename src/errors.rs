// ABOUTME: Error types used across the supplement advisor
// ABOUTME: Re-exports the unified AppError shape and the completion error taxonomy from advisor-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Unified Error Handling System
//!
//! The definitions live in `advisor-core` so the structuring crate and the
//! root crate share one error vocabulary.

pub use advisor_core::errors::{AppError, AppResult, CompletionError, ErrorCode};
