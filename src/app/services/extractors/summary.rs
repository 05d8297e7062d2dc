//! Narrative summary splitting on ordered section keywords

use crate::app::models::{Extraction, SummarySections};
use crate::app::services::grammar::{SectionSlot, ZoneGrammar};
use crate::constants::CARRIAGE_RETURN_ARTIFACT;
use tracing::debug;

/// Split a raw narrative cell into the three canonical sections.
///
/// Each keyword in the zone's fixed order begins a new section; a section's
/// content runs from its marker to the next recognized keyword or
/// end-of-text. Every section is always present; an absent keyword yields
/// an empty string, and absence of all keywords dumps the whole text into
/// `Summary Report` (tagged as a fallback).
pub fn split_summary(raw: &str, grammar: &ZoneGrammar) -> Extraction<SummarySections> {
    let rule = &grammar.summary_rule;
    let text = normalize_artifacts(raw);
    if text.is_empty() {
        return Extraction::Parsed(SummarySections::default());
    }

    // First occurrence of each keyword, in the zone's keyword order. The
    // bare keyword bounds sections even where the full marker fails to
    // capture (e.g. a missing time token).
    let boundary_hits: Vec<Option<usize>> = rule
        .markers
        .iter()
        .map(|marker| marker.boundary.find(&text).map(|m| m.start()))
        .collect();

    if boundary_hits.iter().all(Option::is_none) {
        debug!(
            "No summary keyword found for {}: keeping whole text as summary report",
            grammar.zone
        );
        let mut sections = SummarySections::default();
        sections.summary_report = text;
        return Extraction::Fallback(sections);
    }

    let mut sections = SummarySections::default();

    if let Some(slot) = rule.leading {
        let first_keyword = boundary_hits
            .iter()
            .flatten()
            .copied()
            .min()
            .unwrap_or(text.len());
        assign(&mut sections, slot, text[..first_keyword].trim());
    }

    for (index, marker) in rule.markers.iter().enumerate() {
        if boundary_hits[index].is_none() {
            continue;
        }
        // Content is only captured when the full marker matches
        let Some(matched) = marker.capture.find(&text) else {
            continue;
        };
        let content_start = matched.end();
        let content_end = boundary_hits
            .iter()
            .skip(index + 1)
            .flatten()
            .copied()
            .filter(|start| *start >= content_start)
            .min()
            .unwrap_or(text.len());

        let mut content = text[content_start..content_end].trim();
        if marker.strip_leading_dash {
            if let Some(rest) = content.strip_prefix('-') {
                content = rest.trim_start();
            }
        }
        assign(&mut sections, marker.slot, content);
    }

    Extraction::Parsed(sections)
}

/// Normalize the spreadsheet carriage-return artifact and trim
fn normalize_artifacts(raw: &str) -> String {
    raw.replace(CARRIAGE_RETURN_ARTIFACT, "\n").trim().to_string()
}

fn assign(sections: &mut SummarySections, slot: SectionSlot, content: &str) {
    match slot {
        SectionSlot::SummaryReport => sections.summary_report = content.to_string(),
        SectionSlot::CurrentStatus => sections.current_status = content.to_string(),
        SectionSlot::NextPlan => sections.next_plan = content.to_string(),
    }
}
