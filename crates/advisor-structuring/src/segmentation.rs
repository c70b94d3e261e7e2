// ABOUTME: Section segmentation for report text using heading or emphasized-line delimiters
// ABOUTME: Also owns title extraction and the list of narrative section titles to skip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use regex::Regex;
use std::sync::LazyLock;

use crate::fields::is_field_label;

/// Level-2 markdown heading at line start (`## Title`, not `###`)
static HEADING_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*##[ \t]+\S").ok());

/// Short line made only of bold text (`**Title**` or `**Title:**`)
static EMPHASIS_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\*\*[^*\n]{1,80}\*\*[ \t]*:?[ \t]*$").ok());

static HEADING_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[ \t]*##[ \t]+(.+?)[ \t#]*$").ok());

static EMPHASIS_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*\*([^*\n]{1,80})\*\*[ \t]*:?[ \t]*$").ok());

/// Any markdown heading, used to end note blocks
static ANY_HEADING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[ \t]*#{1,6}[ \t]+\S").ok());

static LIST_NUMBERING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[.)][ \t]*").ok());

/// Lower-case fragments identifying narrative (non-supplement) sections.
///
/// Matching is by substring on the lower-cased title.
pub const EXCLUDED_SECTION_TITLES: &[&str] = &[
    // framing
    "introducción",
    "introduccion",
    "introduction",
    "conclusión",
    "conclusion",
    "resumen",
    "summary",
    // notes and considerations
    "notas adicionales",
    "notas generales",
    "additional notes",
    "general notes",
    "consideraciones",
    "considerations",
    "recomendaciones generales",
    "general recommendations",
    "importante",
    "advertencia",
    "aviso",
    "descargo",
    "disclaimer",
    "seguridad",
    // product links
    "productos",
    "products",
    "enlaces",
    "links",
    "dónde comprar",
    "donde comprar",
    // profile recap
    "tu perfil",
    "perfil del usuario",
    "datos del perfil",
    "your profile",
    // per-sport preambles
    "específico para",
    "específicos para",
    "especifico para",
    "especificos para",
    "para tu deporte",
    "según tu deporte",
    "segun tu deporte",
    "for your sport",
    // per-experience preambles
    "según tu nivel",
    "segun tu nivel",
    "nivel de experiencia",
    "para principiantes",
    "nivel intermedio",
    "nivel avanzado",
    "experience level",
];

/// Which delimiter convention produced the sections of a parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStrategy {
    /// `## Heading` lines
    Headings,
    /// Stand-alone `**Bold**` lines (older authoring convention)
    EmphasizedLines,
}

/// Split `text` into candidate sections.
///
/// Heading boundaries are tried first and used only if they yield more than
/// one segment; otherwise emphasized lines are used. The strategies are never
/// mixed within a call.
#[must_use]
pub fn split_sections(text: &str) -> (SectionStrategy, Vec<&str>) {
    let by_heading = split_at(text, HEADING_BOUNDARY.as_ref());
    if by_heading.len() > 1 {
        return (SectionStrategy::Headings, by_heading);
    }
    (
        SectionStrategy::EmphasizedLines,
        split_at(text, EMPHASIS_BOUNDARY.as_ref()),
    )
}

/// Cut `text` at every boundary match start, dropping blank segments.
///
/// A bold line that is only a field label (`**Dosis recomendada:**`) belongs
/// to the card above it and never starts a section.
fn split_at<'a>(text: &'a str, boundary: Option<&Regex>) -> Vec<&'a str> {
    let mut starts: Vec<usize> = boundary
        .map(|re| {
            re.find_iter(text)
                .filter(|m| !is_emphasized_field_label(m.as_str()))
                .map(|m| m.start())
                .collect()
        })
        .unwrap_or_default();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut segments = Vec::with_capacity(starts.len());
    for (index, &start) in starts.iter().enumerate() {
        let end = starts.get(index + 1).copied().unwrap_or(text.len());
        let segment = &text[start..end];
        if !segment.trim().is_empty() {
            segments.push(segment);
        }
    }
    segments
}

/// First heading-style line of a section, cleaned; `None` if absent or empty
#[must_use]
pub fn extract_title(section: &str) -> Option<String> {
    section
        .lines()
        .find_map(title_from_line)
        .filter(|title| !title.is_empty())
}

fn title_from_line(line: &str) -> Option<String> {
    if is_emphasized_field_label(line) {
        return None;
    }
    [HEADING_TITLE.as_ref(), EMPHASIS_TITLE.as_ref()]
        .into_iter()
        .flatten()
        .find_map(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|raw| clean_title(raw.as_str()))
}

/// `**Label:**` line whose text is a dosage, timing, or notes label
fn is_emphasized_field_label(line: &str) -> bool {
    EMPHASIS_TITLE
        .as_ref()
        .and_then(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .is_some_and(|raw| is_field_label(&clean_title(raw.as_str())))
}

fn clean_title(raw: &str) -> String {
    let without_markers = raw.replace("**", "").replace("__", "");
    let trimmed = without_markers
        .trim()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| c == ':' || c == '*' || c == '_' || c.is_whitespace());
    LIST_NUMBERING
        .as_ref()
        .map_or_else(
            || trimmed.to_owned(),
            |re| re.replace(trimmed, "").into_owned(),
        )
        .trim()
        .to_owned()
}

/// Whether a title names a narrative section rather than a supplement
#[must_use]
pub fn is_excluded_title(title: &str) -> bool {
    let lowered = title.to_lowercase();
    EXCLUDED_SECTION_TITLES
        .iter()
        .any(|fragment| lowered.contains(fragment))
}

/// Whether `line` starts a new section under either convention
#[must_use]
pub fn is_section_delimiter(line: &str) -> bool {
    ANY_HEADING.as_ref().is_some_and(|re| re.is_match(line))
        || (EMPHASIS_TITLE.as_ref().is_some_and(|re| re.is_match(line))
            && !is_emphasized_field_label(line))
}

/// Whether `line` is the title line of a section
#[must_use]
pub fn is_title_line(line: &str) -> bool {
    title_from_line(line).is_some()
}
