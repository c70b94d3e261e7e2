// ABOUTME: Extraction of free-form "additional notes / important / considerations" blocks
// ABOUTME: Scans the whole report independently of supplement sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use regex::Regex;
use std::sync::LazyLock;

use crate::fields::starts_with_field_label;
use crate::segmentation::is_section_delimiter;

const NOTE_LABELS: &str = r"notas?[ \t]+adicionales|notas?[ \t]+importantes?|importante|consideraciones(?:[ \t]+(?:adicionales|importantes|generales|finales))?|additional[ \t]+notes|important(?:[ \t]+notes)?|considerations";

/// Label patterns in the three shapes authors use for note blocks
static NOTE_LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // ## Notas adicionales (rest of the heading is part of the title)
        format!(r"(?im)^[ \t]*#{{1,6}}[ \t]+[*_]*[ \t]*(?:{NOTE_LABELS})\b[^\n]*$()"),
        // **Importante:** inline text
        format!(r"(?im)^[ \t]*(?:[-*•+][ \t]+)?[*_]{{2}}[ \t]*(?:{NOTE_LABELS})[ \t]*:?[ \t]*[*_]{{2}}[ \t]*:?[ \t]*(.*)$"),
        // Importante: inline text
        format!(r"(?im)^[ \t]*(?:[-*•+][ \t]+)?(?:{NOTE_LABELS})[ \t]*:[ \t]*(.*)$"),
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Bullet or numbered list item
static LIST_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[-*•+]|\d{1,2}[.)])[ \t]+").ok());

/// Where the lines following a label stop belonging to its note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockEnd {
    /// Label stands alone on its line: run to the next section delimiter
    NextSection,
    /// Label carries inline text: keep only wrapped continuation lines
    EndOfParagraph,
}

struct NoteCandidate {
    start: usize,
    end: usize,
    text: String,
}

/// Collect note blocks in document order.
///
/// A label standing alone on its line (a heading, `**Importante:**`) owns
/// every following line up to the next section delimiter. A label with
/// inline text owns that text plus its wrapped continuation lines, stopping
/// at a blank line, a list item, another label, or a section delimiter, so a
/// note bullet inside a supplement card never swallows the card's fields.
/// Blocks nested inside an earlier block and exact duplicates are skipped.
#[must_use]
pub fn extract_additional_notes(text: &str) -> Vec<String> {
    let mut candidates: Vec<NoteCandidate> = NOTE_LABEL_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| {
            let label = caps.get(0)?;
            let inline = caps.get(1).map_or("", |m| m.as_str().trim());
            let block_end = if inline.is_empty() {
                BlockEnd::NextSection
            } else {
                BlockEnd::EndOfParagraph
            };
            let (trailing, end) = trailing_block(text, label.end(), block_end);
            let block = [inline, trailing.trim()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            Some(NoteCandidate {
                start: label.start(),
                end,
                text: block,
            })
        })
        .collect();

    candidates.sort_by_key(|candidate| candidate.start);

    let mut notes: Vec<String> = Vec::new();
    let mut covered_until = 0;
    for candidate in candidates {
        if candidate.start < covered_until {
            continue;
        }
        covered_until = candidate.end;
        if !candidate.text.is_empty() && !notes.contains(&candidate.text) {
            notes.push(candidate.text);
        }
    }
    notes
}

/// Lines after `from` up to (not including) the first line ending the block
fn trailing_block(text: &str, from: usize, block_end: BlockEnd) -> (&str, usize) {
    let rest = &text[from..];
    let body_start = rest.find('\n').map_or(rest.len(), |i| i + 1);

    let mut offset = body_start;
    for line in rest[body_start..].split_inclusive('\n') {
        if ends_block(line.trim_end_matches(['\r', '\n']), block_end) {
            break;
        }
        offset += line.len();
    }
    (&rest[body_start..offset], from + offset)
}

fn ends_block(line: &str, block_end: BlockEnd) -> bool {
    if is_section_delimiter(line) {
        return true;
    }
    match block_end {
        BlockEnd::NextSection => false,
        BlockEnd::EndOfParagraph => {
            line.trim().is_empty()
                || LIST_ITEM.as_ref().is_some_and(|re| re.is_match(line))
                || starts_with_field_label(line)
                || NOTE_LABEL_PATTERNS.iter().any(|re| re.is_match(line))
        }
    }
}
