//! Well-name splitting under per-zone pattern families

use crate::app::models::{Extraction, WellNameParts};
use crate::app::services::grammar::{WellNameRule, ZoneGrammar};
use crate::constants::ZERO_WIDTH_CHARS;
use regex::Regex;
use tracing::debug;

/// Split a raw well-name cell into `(well_name, well_name_2)`.
///
/// Both output fields are trimmed and always present; a pattern miss falls
/// back to substituting the whole string per the zone's grammar.
pub fn split_well_name(raw: &str, grammar: &ZoneGrammar) -> Extraction<WellNameParts> {
    match &grammar.well_name_rule {
        WellNameRule::SplitOnSlash => split_on_slash(raw),
        WellNameRule::StackedParens {
            three_part,
            two_part,
        } => split_stacked_parens(raw, three_part, two_part, grammar),
        WellNameRule::InlineParens { pattern } => split_inline_parens(raw, pattern, grammar),
    }
}

/// Zone 1: split on the first `/` only; no slash means no secondary name
fn split_on_slash(raw: &str) -> Extraction<WellNameParts> {
    let text = raw.trim();
    match text.split_once('/') {
        Some((primary, secondary)) => {
            Extraction::Parsed(WellNameParts::new(primary.trim(), secondary.trim()))
        }
        None => Extraction::Parsed(WellNameParts::new(text, "")),
    }
}

/// Zone 2&3: `Part1 <newline> (Part2) <newline> (Part3)`, parentheses
/// optional around the newline, second parenthetical optional.
///
/// Part1 is redundant long-form text and is discarded; the output is
/// `(Part2, Part3)` after promotion, so both fields are non-empty whenever
/// any signal exists.
fn split_stacked_parens(
    raw: &str,
    three_part: &Regex,
    two_part: &Regex,
    grammar: &ZoneGrammar,
) -> Extraction<WellNameParts> {
    let text = raw.trim();
    if text.is_empty() {
        return Extraction::Parsed(WellNameParts::default());
    }

    let (parts, matched) = if let Some(caps) = three_part.captures(text) {
        (
            (
                caps[1].trim().to_string(),
                caps[2].trim().to_string(),
                caps[3].trim().to_string(),
            ),
            true,
        )
    } else if let Some(caps) = two_part.captures(text) {
        (
            (
                caps[1].trim().to_string(),
                caps[2].trim().to_string(),
                String::new(),
            ),
            true,
        )
    } else {
        debug!(
            "Well-name pattern miss for {}: substituting whole string",
            grammar.zone
        );
        ((text.to_string(), String::new(), String::new()), false)
    };

    let (part_1, mut part_2, mut part_3) = parts;
    if part_2.is_empty() && !part_1.is_empty() {
        part_2 = part_1;
    }
    if part_3.is_empty() && !part_2.is_empty() {
        part_3 = part_2.clone();
    }

    let split = WellNameParts::new(part_2, part_3);
    if matched {
        Extraction::Parsed(split)
    } else {
        Extraction::Fallback(split)
    }
}

/// Zone 4: `Part1 (Part2)` on one line, zero-width characters stripped first
fn split_inline_parens(
    raw: &str,
    pattern: &Regex,
    grammar: &ZoneGrammar,
) -> Extraction<WellNameParts> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !ZERO_WIDTH_CHARS.contains(c))
        .collect();
    let text = cleaned.trim();
    if text.is_empty() {
        return Extraction::Parsed(WellNameParts::default());
    }

    match pattern.captures(text) {
        Some(caps) => {
            let primary = caps[1].trim().to_string();
            let secondary = caps[2].trim().to_string();
            let secondary = if secondary.is_empty() {
                primary.clone()
            } else {
                secondary
            };
            Extraction::Parsed(WellNameParts::new(primary, secondary))
        }
        None => {
            debug!(
                "Well-name pattern miss for {}: substituting whole string",
                grammar.zone
            );
            Extraction::Fallback(WellNameParts::new(text, text))
        }
    }
}
