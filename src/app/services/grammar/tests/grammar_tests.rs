//! Tests for per-zone grammar construction

use crate::app::models::ZoneTag;
use crate::app::services::grammar::{SectionSlot, WellNameRule, ZoneGrammar};
use crate::config::EngineConfig;

#[test]
fn test_zone_1_grammar_shape() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone1, &EngineConfig::default()).unwrap();

    assert!(matches!(grammar.well_name_rule, WellNameRule::SplitOnSlash));
    assert!(!grammar.sort_by_rig_name);
    assert!(grammar.rig_name_rule.strip_rig_prefix);
    assert!(grammar.rig_name_rule.replacements.is_empty());

    // Single keyword: everything before "Plan:" is the summary report
    assert_eq!(grammar.summary_rule.leading, Some(SectionSlot::SummaryReport));
    assert_eq!(grammar.summary_rule.markers.len(), 1);
    assert_eq!(grammar.summary_rule.markers[0].slot, SectionSlot::NextPlan);
}

#[test]
fn test_zone_1_plan_marker_is_case_insensitive() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone1, &EngineConfig::default()).unwrap();
    let marker = &grammar.summary_rule.markers[0];

    assert!(marker.boundary.is_match("Plan:"));
    assert!(marker.boundary.is_match("PLAN :"));
    assert!(marker.boundary.is_match("plan:"));
    assert!(!marker.boundary.is_match("Plankton"));
}

#[test]
fn test_zone_23_grammar_shape() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone23, &EngineConfig::default()).unwrap();

    assert!(matches!(
        grammar.well_name_rule,
        WellNameRule::StackedParens { .. }
    ));
    assert!(grammar.sort_by_rig_name);
    assert!(!grammar.rig_name_rule.strip_rig_prefix);

    let slots: Vec<_> = grammar.summary_rule.markers.iter().map(|m| m.slot).collect();
    assert_eq!(
        slots,
        vec![
            SectionSlot::SummaryReport,
            SectionSlot::CurrentStatus,
            SectionSlot::NextPlan
        ]
    );
    assert_eq!(grammar.summary_rule.leading, None);
    assert!(grammar.summary_rule.markers[0].strip_leading_dash);
}

#[test]
fn test_zone_23_status_capture_requires_time_token() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone23, &EngineConfig::default()).unwrap();
    let status = &grammar.summary_rule.markers[1];

    // Bare keyword bounds the previous section but does not capture
    assert!(status.boundary.is_match("Status Pagi lanjut"));
    assert!(!status.capture.is_match("Status Pagi lanjut"));
    assert!(status.capture.is_match("Status Pagi 06:00: lanjut"));
    assert!(status.capture.is_match("Status Pagi 6:30 : lanjut"));
}

#[test]
fn test_zone_4_grammar_shape() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone4, &EngineConfig::default()).unwrap();

    assert!(matches!(
        grammar.well_name_rule,
        WellNameRule::InlineParens { .. }
    ));
    assert!(grammar.sort_by_rig_name);
    assert!(grammar.rig_name_rule.strip_rig_prefix);
    assert!(!grammar.rig_name_rule.replacements.is_empty());
    assert!(grammar.rig_name_rule.gap_collapse.is_some());

    assert_eq!(grammar.summary_rule.leading, Some(SectionSlot::SummaryReport));
    let slots: Vec<_> = grammar.summary_rule.markers.iter().map(|m| m.slot).collect();
    assert_eq!(slots, vec![SectionSlot::CurrentStatus, SectionSlot::NextPlan]);
}

#[test]
fn test_zone_4_status_time_token_is_optional() {
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone4, &EngineConfig::default()).unwrap();
    let status = &grammar.summary_rule.markers[0];

    assert!(status.capture.is_match("Status Pagi: running"));
    assert!(status.capture.is_match("Status Pagi 06:00: running"));
}

#[test]
fn test_keyword_literals_are_escaped() {
    // A keyword containing regex metacharacters must compile and match literally
    let mut config = EngineConfig::default();
    config.summary_keywords.zone_1_next_plan = "Plan (next)".to_string();
    let grammar = ZoneGrammar::for_zone(ZoneTag::Zone1, &config).unwrap();
    assert!(grammar.summary_rule.markers[0].boundary.is_match("Plan (next):"));
}
