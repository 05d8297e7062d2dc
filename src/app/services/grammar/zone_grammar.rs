//! Grammar configuration types for per-zone text conventions

use crate::app::models::ZoneTag;
use crate::config::EngineConfig;
use crate::constants::PDSI_PREFIX;
use crate::{Error, Result};
use regex::Regex;

/// Destination slot for a narrative section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlot {
    SummaryReport,
    CurrentStatus,
    NextPlan,
}

/// One summary delimiter keyword in a zone's fixed keyword order.
///
/// The `boundary` pattern is the bare keyword; it ends the preceding section
/// wherever it occurs. The `capture` pattern is the full marker including any
/// time token and the trailing colon; a section's own content is only
/// captured when it matches. Keeping the two apart preserves the source
/// behavior where "Status Pagi" without a time token bounds the previous
/// section but yields no Current Status content.
#[derive(Debug, Clone)]
pub struct SectionMarker {
    pub slot: SectionSlot,
    pub boundary: Regex,
    pub capture: Regex,
    /// Strip one leading `-` from the captured content
    pub strip_leading_dash: bool,
}

/// How a zone's narrative cell splits into sections
#[derive(Debug, Clone)]
pub struct SummaryRule {
    /// Where text before the first recognized keyword goes, if anywhere
    pub leading: Option<SectionSlot>,
    /// Recognized keywords in the zone's fixed order
    pub markers: Vec<SectionMarker>,
}

/// Which well-name pattern family a zone uses
#[derive(Debug, Clone)]
pub enum WellNameRule {
    /// Zone 1: split on the first `/`; right part may be absent
    SplitOnSlash,
    /// Zone 2&3: `Part1 <newline> (Part2) <newline> (Part3)`, second
    /// parenthetical optional; Part1 is discarded, with promotion fallbacks
    StackedParens { three_part: Regex, two_part: Regex },
    /// Zone 4: `Part1 (Part2)` on one line, zero-width characters stripped
    InlineParens { pattern: Regex },
}

/// Whitespace-gap collapse after a fixed rig-name prefix
#[derive(Debug, Clone)]
pub struct PrefixGapCollapse {
    pub prefix: String,
    pub pattern: Regex,
}

impl PrefixGapCollapse {
    fn new(prefix: &str) -> Result<Self> {
        let pattern = compile(&format!(r"({})\s+", regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }
}

/// Rig-name normalization steps for a zone
#[derive(Debug, Clone)]
pub struct RigNameRule {
    /// Remove the literal `Rig` token prefixing the name
    pub strip_rig_prefix: bool,
    /// Exact-match substitutions for historically inconsistent names
    pub replacements: Vec<(String, String)>,
    /// Collapse whitespace immediately following a fixed prefix
    pub gap_collapse: Option<PrefixGapCollapse>,
}

/// Immutable per-zone grammar: the complete description of how one zone's
/// raw text maps to canonical fields.
#[derive(Debug, Clone)]
pub struct ZoneGrammar {
    pub zone: ZoneTag,
    pub well_name_rule: WellNameRule,
    pub summary_rule: SummaryRule,
    pub rig_name_rule: RigNameRule,
    /// Sort the zone batch by normalized rig name before assembly
    pub sort_by_rig_name: bool,
}

impl ZoneGrammar {
    /// Build the grammar for a zone from the configured keyword literals
    /// and substitution tables.
    pub fn for_zone(zone: ZoneTag, config: &EngineConfig) -> Result<Self> {
        match zone {
            ZoneTag::Zone1 => Self::zone_1(config),
            ZoneTag::Zone23 => Self::zone_23(config),
            ZoneTag::Zone4 => Self::zone_4(config),
        }
    }

    fn zone_1(config: &EngineConfig) -> Result<Self> {
        let plan = regex::escape(&config.summary_keywords.zone_1_next_plan);
        Ok(Self {
            zone: ZoneTag::Zone1,
            well_name_rule: WellNameRule::SplitOnSlash,
            summary_rule: SummaryRule {
                leading: Some(SectionSlot::SummaryReport),
                markers: vec![SectionMarker {
                    slot: SectionSlot::NextPlan,
                    boundary: compile(&format!(r"(?i){}\s*:", plan))?,
                    capture: compile(&format!(r"(?i){}\s*:\s*", plan))?,
                    strip_leading_dash: false,
                }],
            },
            rig_name_rule: RigNameRule {
                strip_rig_prefix: true,
                replacements: Vec::new(),
                gap_collapse: None,
            },
            sort_by_rig_name: false,
        })
    }

    fn zone_23(config: &EngineConfig) -> Result<Self> {
        let kw = &config.summary_keywords;
        let summary = regex::escape(&kw.zone_23_summary);
        let status = regex::escape(&kw.zone_23_status);
        let plan = regex::escape(&kw.zone_23_next_plan);
        Ok(Self {
            zone: ZoneTag::Zone23,
            well_name_rule: WellNameRule::StackedParens {
                three_part: compile(r"^([^\n]*)\n?\(([^)]*)\)\s*\n?\s*\(([^)]*)\)\s*$")?,
                two_part: compile(r"^([^\n]*)\n?\(([^)]*)\)\s*$")?,
            },
            summary_rule: SummaryRule {
                leading: None,
                markers: vec![
                    SectionMarker {
                        slot: SectionSlot::SummaryReport,
                        boundary: compile(&format!(r"{}:", summary))?,
                        capture: compile(&format!(r"{}:\s*", summary))?,
                        strip_leading_dash: true,
                    },
                    SectionMarker {
                        slot: SectionSlot::CurrentStatus,
                        boundary: compile(&status)?,
                        capture: compile(&format!(r"{}\s*\d{{1,2}}:\d{{2}}\s*:\s*", status))?,
                        strip_leading_dash: false,
                    },
                    SectionMarker {
                        slot: SectionSlot::NextPlan,
                        boundary: compile(&format!(r"{}:", plan))?,
                        capture: compile(&format!(r"{}:\s*", plan))?,
                        strip_leading_dash: false,
                    },
                ],
            },
            rig_name_rule: RigNameRule {
                strip_rig_prefix: false,
                replacements: Vec::new(),
                gap_collapse: None,
            },
            sort_by_rig_name: true,
        })
    }

    fn zone_4(config: &EngineConfig) -> Result<Self> {
        let kw = &config.summary_keywords;
        let status = regex::escape(&kw.zone_4_status);
        let plan = regex::escape(&kw.zone_4_next_plan);
        Ok(Self {
            zone: ZoneTag::Zone4,
            well_name_rule: WellNameRule::InlineParens {
                pattern: compile(r"^(.+?)\s*\(([^)]*)\)\s*$")?,
            },
            summary_rule: SummaryRule {
                leading: Some(SectionSlot::SummaryReport),
                markers: vec![
                    SectionMarker {
                        slot: SectionSlot::CurrentStatus,
                        boundary: compile(&status)?,
                        capture: compile(&format!(
                            r"{}(?:\s*\d{{1,2}}:\d{{2}})?\s*:\s*",
                            status
                        ))?,
                        strip_leading_dash: false,
                    },
                    SectionMarker {
                        slot: SectionSlot::NextPlan,
                        boundary: compile(&format!(r"{}:", plan))?,
                        capture: compile(&format!(r"{}:\s*", plan))?,
                        strip_leading_dash: false,
                    },
                ],
            },
            rig_name_rule: RigNameRule {
                strip_rig_prefix: true,
                replacements: config.rig_replacements.clone(),
                gap_collapse: Some(PrefixGapCollapse::new(PDSI_PREFIX)?),
            },
            sort_by_rig_name: true,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::configuration(format!("Invalid grammar pattern '{}': {}", pattern, e)))
}
