// ABOUTME: Structured supplement records produced by the content structuring engine
// ABOUTME: Defines categories, visual signature buckets, and the parsed report container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// When in the training day a supplement is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplementCategory {
    /// Before the session
    PreWorkout,
    /// After the session
    PostWorkout,
    /// During the session
    DuringWorkout,
    /// Not tied to the session
    #[default]
    Daily,
}

impl SupplementCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [
        Self::PreWorkout,
        Self::DuringWorkout,
        Self::PostWorkout,
        Self::Daily,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PreWorkout => "pre-workout",
            Self::PostWorkout => "post-workout",
            Self::DuringWorkout => "during-workout",
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for SupplementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known-ingredient buckets, in matching precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientBucket {
    /// Whey, casein, plant protein
    Protein,
    /// Creatine in any form
    Creatine,
    /// Omega-3 / fish oil
    Omega,
    /// BCAA, EAA, leucine
    AminoAcids,
    /// Sodium, potassium, isotonic drinks
    Electrolytes,
    /// Caffeine and pre-workout blends
    Stimulant,
    /// Vitamins and multivitamins
    Vitamin,
    /// Magnesium, zinc, iron, calcium
    Mineral,
    /// Glutamine
    Glutamine,
    /// Carbohydrate powders and gels
    Carbohydrate,
    /// L-carnitine
    Carnitine,
    /// L-theanine
    Theanine,
    /// Beta-alanine
    BetaAlanine,
}

impl IngredientBucket {
    /// Every bucket in matching precedence order
    pub const ALL: [Self; 13] = [
        Self::Protein,
        Self::Creatine,
        Self::Omega,
        Self::AminoAcids,
        Self::Electrolytes,
        Self::Stimulant,
        Self::Vitamin,
        Self::Mineral,
        Self::Glutamine,
        Self::Carbohydrate,
        Self::Carnitine,
        Self::Theanine,
        Self::BetaAlanine,
    ];

    /// Stable key used by renderers
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Creatine => "creatine",
            Self::Omega => "omega",
            Self::AminoAcids => "amino-acids",
            Self::Electrolytes => "electrolytes",
            Self::Stimulant => "stimulant",
            Self::Vitamin => "vitamin",
            Self::Mineral => "mineral",
            Self::Glutamine => "glutamine",
            Self::Carbohydrate => "carbohydrate",
            Self::Carnitine => "carnitine",
            Self::Theanine => "theanine",
            Self::BetaAlanine => "beta-alanine",
        }
    }

    /// Card accent color
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Protein => "#3B82F6",
            Self::Creatine => "#8B5CF6",
            Self::Omega => "#F59E0B",
            Self::AminoAcids => "#10B981",
            Self::Electrolytes => "#06B6D4",
            Self::Stimulant => "#EF4444",
            Self::Vitamin => "#F97316",
            Self::Mineral => "#64748B",
            Self::Glutamine => "#14B8A6",
            Self::Carbohydrate => "#EAB308",
            Self::Carnitine => "#EC4899",
            Self::Theanine => "#84CC16",
            Self::BetaAlanine => "#A855F7",
        }
    }
}

/// Fallback palette for names that match no known ingredient
pub const PALETTE_COLORS: [&str; 6] = [
    "#6366F1", "#0EA5E9", "#22C55E", "#F43F5E", "#D946EF", "#78716C",
];

/// Stable rendering key for a supplement name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum VisualSignature {
    /// Name matched a known ingredient keyword
    Ingredient(IngredientBucket),
    /// Name hashed into one of `PALETTE_COLORS`
    Palette(u8),
}

impl VisualSignature {
    /// Stable key, e.g. `protein` or `palette-3`
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Ingredient(bucket) => bucket.key().to_owned(),
            Self::Palette(slot) => format!("palette-{slot}"),
        }
    }

    /// Hex color for rendering
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ingredient(bucket) => bucket.color(),
            Self::Palette(slot) => PALETTE_COLORS[usize::from(*slot) % PALETTE_COLORS.len()],
        }
    }
}

/// One supplement card extracted from report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementInfo {
    /// Section title, never empty
    pub name: String,
    /// Inferred training-day slot
    pub category: SupplementCategory,
    /// Recommended dose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    /// When to take it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    /// Interactions, cautions, or notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<String>,
    /// Rendering key derived from the name
    pub visual_signature: VisualSignature,
}

impl SupplementInfo {
    /// Whether any field besides the name was extracted
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.dosage.is_some() || self.timing.is_some() || self.interactions.is_some()
    }
}

/// Output of one structuring pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    /// Supplements in order of appearance
    pub supplements: Vec<SupplementInfo>,
    /// Free-form note blocks in order of appearance
    pub additional_notes: Vec<String>,
}

impl ParsedReport {
    /// Supplements belonging to `category`, preserving order
    pub fn by_category(
        &self,
        category: SupplementCategory,
    ) -> impl Iterator<Item = &SupplementInfo> + '_ {
        self.supplements
            .iter()
            .filter(move |s| s.category == category)
    }

    /// Whether nothing at all was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty() && self.additional_notes.is_empty()
    }
}
