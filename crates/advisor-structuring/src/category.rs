// ABOUTME: Supplement category inference from the supplement name and its timing text
// ABOUTME: Fixed precedence: post-workout, pre-workout, during-workout, then daily
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use advisor_core::models::SupplementCategory;

/// Protein products always land in post-workout
const PROTEIN_NAME_KEYWORDS: &[&str] = &[
    "proteína",
    "proteina",
    "protein",
    "whey",
    "caseína",
    "caseina",
    "casein",
    "recuperador",
    "recovery",
];

const POST_WORKOUT_PHRASES: &[&str] = &[
    "después del entren",
    "despues del entren",
    "después de entrenar",
    "despues de entrenar",
    "después del ejercicio",
    "despues del ejercicio",
    "tras el entren",
    "tras el ejercicio",
    "post-entreno",
    "post entreno",
    "postentreno",
    "post-workout",
    "after training",
    "after workout",
];

const STIMULANT_NAME_KEYWORDS: &[&str] = &[
    "cafeína",
    "cafeina",
    "caffeine",
    "pre-entreno",
    "preentreno",
    "pre-workout",
    "citrulina",
    "citrulline",
    "arginina",
    "arginine",
    "óxido nítrico",
    "oxido nitrico",
    "nitrato",
    "remolacha",
    "beta-alanina",
    "beta alanina",
    "pump",
];

const PRE_WORKOUT_PHRASES: &[&str] = &[
    "antes del entren",
    "antes de entrenar",
    "antes del ejercicio",
    "minutos antes",
    "pre-entreno",
    "pre entreno",
    "preentreno",
    "pre-workout",
    "before training",
    "before workout",
];

const INTRA_NAME_KEYWORDS: &[&str] = &[
    "electrolito",
    "electrolyte",
    "isotónic",
    "isotonic",
    "bcaa",
    "gel",
    "intra",
];

const INTRA_PHRASES: &[&str] = &["durante", "during", "intra-entreno", "intraentreno"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Infer the training-day slot for a supplement
///
/// Name and timing are compared lower-cased. Anything unmatched is `Daily`.
#[must_use]
pub fn infer_category(name: &str, timing: Option<&str>) -> SupplementCategory {
    let name = name.to_lowercase();
    let timing = timing.map(str::to_lowercase).unwrap_or_default();

    if contains_any(&name, PROTEIN_NAME_KEYWORDS)
        || contains_any(&name, POST_WORKOUT_PHRASES)
        || contains_any(&timing, POST_WORKOUT_PHRASES)
    {
        SupplementCategory::PostWorkout
    } else if contains_any(&name, STIMULANT_NAME_KEYWORDS) || contains_any(&timing, PRE_WORKOUT_PHRASES)
    {
        SupplementCategory::PreWorkout
    } else if contains_any(&name, INTRA_NAME_KEYWORDS) || contains_any(&timing, INTRA_PHRASES) {
        SupplementCategory::DuringWorkout
    } else {
        SupplementCategory::Daily
    }
}
