// ABOUTME: User profile model collected by the questionnaire before report generation
// ABOUTME: Defines gender, experience, and training frequency enums with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as declared in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / not specified
    Other,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parse a free-form value, mapping anything unknown to `Other`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "hombre" | "masculino" => Self::Male,
            "female" | "f" | "mujer" | "femenino" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    Beginner,
    /// One to three years
    #[default]
    Intermediate,
    /// More than three years
    Advanced,
}

impl ExperienceLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse a free-form value; unknown levels resolve to `Intermediate`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Self::Beginner,
            "advanced" | "avanzado" => Self::Advanced,
            _ => Self::Intermediate,
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly training frequency bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TrainingFrequency {
    /// One or two sessions per week
    Low,
    /// Three or four sessions per week
    #[default]
    Medium,
    /// Five or more sessions per week
    High,
}

impl TrainingFrequency {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a free-form value; unknown frequencies resolve to `Medium`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" | "baja" | "1-2" => Self::Low,
            "high" | "alta" | "5+" | "5-7" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl From<String> for TrainingFrequency {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for TrainingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Questionnaire answers used to build the prompt and the fallback report
///
/// Owned by the calling context. The pipeline only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Declared gender
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Free-text goal, e.g. "ganar masa muscular"
    pub objective: String,
    /// Free-text sport or sport slug
    pub sport: String,
    /// Training experience
    pub experience: ExperienceLevel,
    /// Weekly training frequency
    pub training_frequency: TrainingFrequency,
    /// Declared medical conditions
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Declared allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Supplements the user already takes
    #[serde(default)]
    pub current_supplements: Vec<String>,
}
