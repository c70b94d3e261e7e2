// ABOUTME: Report prompt template loaded at compile time and filled from a user profile
// ABOUTME: Instructs the model to follow the heading and bold-label convention the parser reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

use crate::models::UserProfile;

/// Supplement report prompt template with `{field}` placeholders
pub const REPORT_PROMPT_TEMPLATE: &str = include_str!("report_prompt.md");

/// Get the raw report prompt template
#[must_use]
pub const fn get_report_prompt_template() -> &'static str {
    REPORT_PROMPT_TEMPLATE
}

/// Build the user message requesting a report for `profile`
#[must_use]
pub fn build_report_prompt(profile: &UserProfile) -> String {
    let fields = [
        ("{age}", profile.age.to_string()),
        ("{gender}", profile.gender.as_str().to_owned()),
        ("{weight}", format_number(profile.weight_kg)),
        ("{height}", format_number(profile.height_cm)),
        ("{objective}", or_unspecified(&profile.objective)),
        ("{sport}", or_unspecified(&profile.sport)),
        ("{experience}", profile.experience.as_str().to_owned()),
        (
            "{training_frequency}",
            profile.training_frequency.as_str().to_owned(),
        ),
        (
            "{medical_conditions}",
            join_or_none(&profile.medical_conditions),
        ),
        ("{allergies}", join_or_none(&profile.allergies)),
        (
            "{current_supplements}",
            join_or_none(&profile.current_supplements),
        ),
    ];

    fields
        .iter()
        .fold(REPORT_PROMPT_TEMPLATE.to_owned(), |prompt, (placeholder, value)| {
            prompt.replace(placeholder, value)
        })
}

fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn or_unspecified(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "no especificado".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn join_or_none(values: &[String]) -> String {
    let present: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if present.is_empty() {
        "ninguna".to_owned()
    } else {
        present.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Gender, TrainingFrequency};

    fn profile() -> UserProfile {
        UserProfile {
            age: 29,
            gender: Gender::Female,
            weight_kg: 61.5,
            height_cm: 168.0,
            objective: "perder peso".to_owned(),
            sport: "running".to_owned(),
            experience: ExperienceLevel::Beginner,
            training_frequency: TrainingFrequency::High,
            medical_conditions: vec![],
            allergies: vec!["lactosa".to_owned()],
            current_supplements: vec![],
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_report_prompt(&profile());
        for placeholder in ["{age}", "{gender}", "{sport}", "{allergies}"] {
            assert!(!prompt.contains(placeholder), "unfilled {placeholder}");
        }
        assert!(prompt.contains("Edad: 29 años"));
        assert!(prompt.contains("Peso: 61.5 kg"));
        assert!(prompt.contains("Altura: 168 cm"));
        assert!(prompt.contains("Objetivo: perder peso"));
        assert!(prompt.contains("Alergias: lactosa"));
        assert!(prompt.contains("Condiciones médicas: ninguna"));
    }

    #[test]
    fn test_prompt_requests_parseable_labels() {
        let prompt = get_report_prompt_template();
        assert!(prompt.contains("**Dosis recomendada:**"));
        assert!(prompt.contains("**Momento de toma:**"));
        assert!(prompt.contains("## Notas Adicionales"));
    }
}
