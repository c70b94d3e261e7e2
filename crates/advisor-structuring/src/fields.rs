// ABOUTME: Ordered pattern lists for dosage, timing, and interaction extraction
// ABOUTME: Each list is evaluated most-specific first and the first non-empty capture wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Field Extraction
//!
//! Precedence is data, not control flow: every field has an explicit,
//! ordered `Vec<FieldPattern>` that can be inspected and tested on its own.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::segmentation::is_title_line;

/// Optional bullet or list number, then optional emphasis, before a label
const LABEL_PREFIX: &str = r"(?im)^[ \t]*(?:[-*•+]|\d{1,2}[.)])?[ \t]*[*_]*[ \t]*";

/// Emphasis and colon after a label, then the captured value
const LABEL_SUFFIX: &str = r"[ \t]*[*_]*[ \t]*:[ \t]*[*_]*[ \t]*(.+)$";

/// Bullet line, captured whole
const BULLET_PREFIX: &str = r"(?im)^[ \t]*[-*•+][ \t]+(.*";

const RECOMMENDED_DOSE_LABELS: &str =
    r"dosis[ \t]+recomendada|dosis[ \t]+sugerida|recommended[ \t]+dos(?:e|age)";
const DOSE_LABELS: &str = r"dosis|dosificaci[oó]n|dose|dosage|cantidad|amount";
const INTAKE_MOMENT_LABELS: &str = r"momento[ \t]+de[ \t]+(?:la[ \t]+)?toma|mejor[ \t]+momento|cu[aá]ndo[ \t]+tomar(?:lo|la)?|when[ \t]+to[ \t]+take|timing";
const SCHEDULE_LABELS: &str = r"momento|horario|frecuencia|toma|schedule|frequency";
const INTERACTION_LABELS: &str = r"interacciones|interactions?|precauciones|precautions|advertencias?|warnings?|contraindicaciones|efectos[ \t]+secundarios|side[ \t]+effects";
const NOTE_FIELD_LABELS: &str = r"notas?|observaciones|consejos?|notes?|tips?";

const FIELD_LABELS: [&str; 6] = [
    RECOMMENDED_DOSE_LABELS,
    DOSE_LABELS,
    INTAKE_MOMENT_LABELS,
    SCHEDULE_LABELS,
    INTERACTION_LABELS,
    NOTE_FIELD_LABELS,
];

/// Text that is exactly one field label, e.g. `Dosis recomendada`
static FIELD_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})$", FIELD_LABELS.join("|"))).ok()
});

/// Line opening with `label:`, with the same bullet and emphasis tolerance as extraction
static FIELD_LABEL_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^[ \t]*(?:[-*•+]|\d{{1,2}}[.)])?[ \t]*[*_]*[ \t]*(?:{})[ \t]*[*_]*[ \t]*:",
        FIELD_LABELS.join("|")
    ))
    .ok()
});

/// A value extracted from a section together with the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Cleaned value
    pub value: String,
    /// The full source line, trimmed
    pub line: String,
}

/// One entry of an ordered extraction list
#[derive(Debug)]
pub struct FieldPattern {
    /// Identifier shown in logs and tests
    pub name: &'static str,
    regex: Regex,
}

impl FieldPattern {
    /// Compile a pattern whose first capture group is the value
    ///
    /// Returns `None` (and logs) if the expression does not compile.
    #[must_use]
    pub fn new(name: &'static str, pattern: &str) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self { name, regex }),
            Err(e) => {
                warn!("Skipping field pattern {name}: {e}");
                None
            }
        }
    }

    /// Label pattern: `label: value`, tolerant of bullets and emphasis
    #[must_use]
    pub fn labeled(name: &'static str, labels: &str) -> Option<Self> {
        Self::new(name, &format!("{LABEL_PREFIX}(?:{labels}){LABEL_SUFFIX}"))
    }

    /// Bullet line containing one of `keywords`
    #[must_use]
    pub fn bullet_with(name: &'static str, keywords: &str) -> Option<Self> {
        Self::new(name, &format!(r"{BULLET_PREFIX}(?:{keywords}).*)$"))
    }

    /// First occurrence in `section` whose cleaned capture is non-empty
    #[must_use]
    pub fn find(&self, section: &str) -> Option<FieldMatch> {
        self.regex.captures_iter(section).find_map(|caps| {
            let value = clean_value(caps.get(1)?.as_str());
            if value.is_empty() {
                return None;
            }
            let line = caps.get(0)?.as_str().trim().to_owned();
            Some(FieldMatch { value, line })
        })
    }
}

/// Evaluate `patterns` in order and return the first match
#[must_use]
pub fn first_match(patterns: &[FieldPattern], section: &str) -> Option<FieldMatch> {
    patterns.iter().find_map(|pattern| pattern.find(section))
}

static DOSAGE_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    [
        FieldPattern::labeled("recommended_dose_label", RECOMMENDED_DOSE_LABELS),
        FieldPattern::labeled("dose_label", DOSE_LABELS),
        FieldPattern::bullet_with(
            "bullet_with_amount",
            r"\d[\d.,]*(?:[ \t]*[-–][ \t]*\d[\d.,]*)?[ \t]*(?:g|mg|mcg|µg|ui|iu|ml|gramos|miligramos|c[aá]psulas?|comprimidos?|tabletas?|scoops?|cacitos?)\b",
        ),
        FieldPattern::bullet_with(
            "bullet_with_dose_keyword",
            r"\b(?:dosis|dose|gramos|miligramos|porci[oó]n|serving|scoop|cacito)",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
});

static TIMING_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    [
        FieldPattern::labeled("intake_moment_label", INTAKE_MOMENT_LABELS),
        FieldPattern::labeled("schedule_label", SCHEDULE_LABELS),
        FieldPattern::bullet_with(
            "bullet_with_timing_keyword",
            r"\b(?:antes|despu[eé]s|durante|tras|pre-?entreno|post-?entreno|en[ \t]+ayunas|al[ \t]+despertar|con[ \t]+las[ \t]+comidas|before|after|during)\b",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
});

static INTERACTION_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    [
        FieldPattern::labeled("interactions_label", INTERACTION_LABELS),
        FieldPattern::labeled("notes_label", NOTE_FIELD_LABELS),
    ]
    .into_iter()
    .flatten()
    .collect()
});

/// Lower-case fragments that make a loose line read as a caution
pub const WARNING_KEYWORDS: &[&str] = &[
    "evitar",
    "evita ",
    "combinar",
    "combina ",
    "no tomar",
    "no tome",
    "no exceder",
    "no superar",
    "efectos secundarios",
    "precaución",
    "precaucion",
    "consulta",
    "interacción",
    "interaccion",
    "interactúa",
    "avoid",
    "do not take",
    "don't take",
    "side effect",
    "caution",
    "combine",
];

/// Dosage patterns, most specific first
#[must_use]
pub fn dosage_patterns() -> &'static [FieldPattern] {
    &DOSAGE_PATTERNS
}

/// Timing patterns, most specific first
#[must_use]
pub fn timing_patterns() -> &'static [FieldPattern] {
    &TIMING_PATTERNS
}

/// Interaction/notes patterns, most specific first
#[must_use]
pub fn interaction_patterns() -> &'static [FieldPattern] {
    &INTERACTION_PATTERNS
}

/// Whether `text` is nothing but a field label such as `Momento de toma`
#[must_use]
pub fn is_field_label(text: &str) -> bool {
    FIELD_LABEL
        .as_ref()
        .is_some_and(|re| re.is_match(text.trim()))
}

/// Whether `line` opens with a field label followed by a colon
#[must_use]
pub fn starts_with_field_label(line: &str) -> bool {
    FIELD_LABEL_LINE.as_ref().is_some_and(|re| re.is_match(line))
}

/// First line of `section` containing a warning keyword.
///
/// Title lines and the lines listed in `skip_lines` (the dosage and timing
/// source lines) are never selected.
#[must_use]
pub fn warning_line(section: &str, skip_lines: &[&str]) -> Option<FieldMatch> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_title_line(line))
        .filter(|line| !skip_lines.contains(line))
        .find(|line| {
            let lowered = line.to_lowercase();
            WARNING_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        })
        .and_then(|line| {
            let value = clean_value(line);
            (!value.is_empty()).then(|| FieldMatch {
                value,
                line: line.to_owned(),
            })
        })
}

/// Strip bullets, emphasis markers, and surrounding whitespace
#[must_use]
pub fn clean_value(raw: &str) -> String {
    let without_markers = raw.replace("**", "").replace("__", "");
    without_markers
        .trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '•' | '+'))
        .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(dosage_patterns().len(), 4);
        assert_eq!(timing_patterns().len(), 3);
        assert_eq!(interaction_patterns().len(), 2);
    }

    #[test]
    fn test_recommended_dose_label_variants() {
        let pattern = &dosage_patterns()[0];
        for section in [
            "Dosis recomendada: 30g",
            "- **Dosis recomendada:** 30g",
            "* **Dosis recomendada**: 30g",
            "1. Dosis recomendada : 30g",
        ] {
            let found = pattern.find(section).unwrap();
            assert_eq!(found.value, "30g", "section: {section}");
        }
    }

    #[test]
    fn test_specific_label_beats_general_bullet() {
        let section = "## Creatina\n- Tomar 3 g con agua\n- **Dosis recomendada:** 5g diarios\n";
        let found = first_match(dosage_patterns(), section).unwrap();
        assert_eq!(found.value, "5g diarios");
    }

    #[test]
    fn test_bullet_with_amount_fallback() {
        let section = "## Omega 3\n- Aporta EPA y DHA\n- 1-2 g al día con comida\n";
        let found = first_match(dosage_patterns(), section).unwrap();
        assert_eq!(found.value, "1-2 g al día con comida");
    }

    #[test]
    fn test_empty_label_value_falls_through() {
        let section = "**Dosis recomendada:**\n- 200 mg\n";
        let found = first_match(dosage_patterns(), section).unwrap();
        assert_eq!(found.value, "200 mg");
    }

    #[test]
    fn test_timing_label_and_bullet() {
        let labeled = "- **Momento de toma:** Después del ejercicio";
        assert_eq!(
            first_match(timing_patterns(), labeled).unwrap().value,
            "Después del ejercicio"
        );

        let bullet = "- Tomar 30 minutos antes del entrenamiento";
        assert_eq!(
            first_match(timing_patterns(), bullet).unwrap().value,
            "Tomar 30 minutos antes del entrenamiento"
        );
    }

    #[test]
    fn test_interactions_label() {
        let section = "- **Interacciones:** Evitar con anticoagulantes";
        assert_eq!(
            first_match(interaction_patterns(), section).unwrap().value,
            "Evitar con anticoagulantes"
        );
    }

    #[test]
    fn test_warning_line_skips_dosage_and_title() {
        let section = "## Cafeína\n- Dosis: 200mg, no exceder 400mg\n- Evita tomarla por la noche\n";
        let dosage = first_match(dosage_patterns(), section).unwrap();
        let found = warning_line(section, &[dosage.line.as_str()]).unwrap();
        assert_eq!(found.value, "Evita tomarla por la noche");
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  **30g**  "), "30g");
        assert_eq!(clean_value("- Evitar con alcohol"), "Evitar con alcohol");
        assert_eq!(clean_value("__5 g__"), "5 g");
        assert_eq!(clean_value("**"), "");
    }
}
