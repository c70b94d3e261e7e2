// ABOUTME: Top-level structuring entry point combining segmentation and field extraction
// ABOUTME: Produces a ParsedReport of supplement records and additional notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use advisor_core::models::{ParsedReport, SupplementInfo};
use tracing::debug;

use crate::category::infer_category;
use crate::fields::{
    dosage_patterns, first_match, interaction_patterns, timing_patterns, warning_line,
};
use crate::notes::extract_additional_notes;
use crate::segmentation::{extract_title, is_excluded_title, split_sections};
use crate::signature::visual_signature;

/// Parse report text into supplement records and additional notes.
///
/// Never fails: unrecognized formats degrade to fewer records or omitted
/// fields. The same input always yields the same output.
#[must_use]
pub fn parse_report_content(text: &str) -> ParsedReport {
    let normalized = text.replace("\r\n", "\n");
    let (strategy, sections) = split_sections(&normalized);

    let supplements: Vec<SupplementInfo> =
        sections.iter().filter_map(|s| parse_section(s)).collect();
    let additional_notes = extract_additional_notes(&normalized);

    debug!(
        ?strategy,
        sections = sections.len(),
        supplements = supplements.len(),
        notes = additional_notes.len(),
        "Structured report content"
    );

    ParsedReport {
        supplements,
        additional_notes,
    }
}

/// Extract a supplement from one section.
///
/// Returns `None` for sections without a title, narrative sections, and
/// sections that carry a name but no dosage, timing, or interactions.
#[must_use]
pub fn parse_section(section: &str) -> Option<SupplementInfo> {
    let name = extract_title(section)?;
    if is_excluded_title(&name) {
        debug!(title = %name, "Skipping narrative section");
        return None;
    }

    let dosage = first_match(dosage_patterns(), section);
    let timing = first_match(timing_patterns(), section);
    let interactions = first_match(interaction_patterns(), section).or_else(|| {
        let skip: Vec<&str> = [&dosage, &timing]
            .into_iter()
            .flatten()
            .map(|m| m.line.as_str())
            .collect();
        warning_line(section, &skip)
    });

    if dosage.is_none() && timing.is_none() && interactions.is_none() {
        return None;
    }

    let timing = timing.map(|m| m.value);
    Some(SupplementInfo {
        category: infer_category(&name, timing.as_deref()),
        visual_signature: visual_signature(&name),
        dosage: dosage.map(|m| m.value),
        timing,
        interactions: interactions.map(|m| m.value),
        name,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use advisor_core::models::{IngredientBucket, SupplementCategory, VisualSignature};

    const AI_REPORT: &str = "# Tu plan de suplementación\n\
\n\
## Introducción\n\
Basado en tu perfil, te recomendamos lo siguiente.\n\
\n\
## Proteína Whey\n\
- **Dosis recomendada:** 30g\n\
- **Momento de toma:** Después del ejercicio\n\
- **Interacciones:** Ninguna conocida\n\
\n\
## Creatina Monohidrato\n\
- **Dosis recomendada:** 5g diarios\n\
- **Momento de toma:** Cualquier momento del día\n\
- Evitar tomarla con alcohol\n\
\n\
## Ashwagandha\n\
Adaptógeno tradicional.\n\
\n\
## Notas Adicionales\n\
- Mantén una hidratación adecuada.\n";

    #[test]
    fn test_parses_supplements_in_order() {
        let report = parse_report_content(AI_REPORT);
        let names: Vec<_> = report.supplements.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Proteína Whey", "Creatina Monohidrato"]);

        let whey = &report.supplements[0];
        assert_eq!(whey.dosage.as_deref(), Some("30g"));
        assert_eq!(whey.timing.as_deref(), Some("Después del ejercicio"));
        assert_eq!(whey.interactions.as_deref(), Some("Ninguna conocida"));
        assert_eq!(whey.category, SupplementCategory::PostWorkout);
        assert_eq!(
            whey.visual_signature,
            VisualSignature::Ingredient(IngredientBucket::Protein)
        );

        let creatine = &report.supplements[1];
        assert_eq!(
            creatine.interactions.as_deref(),
            Some("Evitar tomarla con alcohol")
        );
        assert_eq!(creatine.category, SupplementCategory::Daily);
    }

    #[test]
    fn test_excluded_section_feeds_notes() {
        let report = parse_report_content(AI_REPORT);
        assert!(report
            .supplements
            .iter()
            .all(|s| s.name != "Notas Adicionales"));
        assert_eq!(
            report.additional_notes,
            vec!["- Mantén una hidratación adecuada.".to_owned()]
        );
    }

    #[test]
    fn test_name_only_section_is_discarded() {
        assert!(parse_section("## Ashwagandha\nAdaptógeno tradicional.\n").is_none());
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let crlf = AI_REPORT.replace('\n', "\r\n");
        assert_eq!(parse_report_content(&crlf), parse_report_content(AI_REPORT));
    }

    #[test]
    fn test_parsed_report_json_shape() {
        let report = parse_report_content(AI_REPORT);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value["additionalNotes"][0],
            "- Mantén una hidratación adecuada."
        );
        let whey = &value["supplements"][0];
        assert_eq!(whey["category"], "post-workout");
        assert_eq!(whey["visualSignature"]["kind"], "ingredient");
        assert_eq!(whey["dosage"], "30g");

        let restored: ParsedReport = serde_json::from_value(value).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_report_content("").is_empty());
    }
}
