// ABOUTME: Core data models for the supplement advisor report pipeline
// ABOUTME: Re-exports profile, report, and supplement record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Data Models
//!
//! - `UserProfile`: immutable input owned by the caller
//! - `ReportResult` / `RetryPolicy`: output and policy of report generation
//! - `SupplementInfo` / `ParsedReport`: output of the structuring engine

mod profile;
mod report;
mod supplement;

pub use profile::{ExperienceLevel, Gender, TrainingFrequency, UserProfile};
pub use report::{ReportResult, ReportSource, RetryPolicy};
pub use supplement::{
    IngredientBucket, ParsedReport, SupplementCategory, SupplementInfo, VisualSignature,
    PALETTE_COLORS,
};
