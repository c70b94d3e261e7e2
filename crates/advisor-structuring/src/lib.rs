// ABOUTME: Content structuring engine for supplement report text
// ABOUTME: Splits text into sections and extracts typed supplement records and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![deny(unsafe_code)]

//! # Advisor Structuring
//!
//! Parses report text following a loose markdown convention back into
//! `SupplementInfo` records for card and PDF rendering. The input may be
//! model-authored or produced by the offline fallback synthesizer; the engine
//! does not care which.
//!
//! ```rust
//! use advisor_structuring::parse_report_content;
//!
//! let report = parse_report_content(
//!     "## Creatina\n- **Dosis recomendada:** 5g\n- **Momento de toma:** Cualquier momento del día\n",
//! );
//! assert_eq!(report.supplements[0].dosage.as_deref(), Some("5g"));
//! ```
//!
//! The engine is deterministic, performs no I/O, and holds no mutable state,
//! so it can be called from any number of threads.

/// Category inference from name and timing keywords
pub mod category;
/// Ordered field extraction patterns
pub mod fields;
/// Additional-notes block extraction
pub mod notes;
/// Top-level parse entry point
pub mod parser;
/// Section segmentation and title handling
pub mod segmentation;
/// Visual signature assignment
pub mod signature;

pub use category::infer_category;
pub use parser::{parse_report_content, parse_section};
pub use segmentation::{split_sections, SectionStrategy};
pub use signature::{stable_hash, visual_signature};
