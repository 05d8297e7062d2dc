//! Engine configuration and validation.
//!
//! The domain-fixed tables the engine depends on (record defaults, the APH
//! zone mapping, rig-name substitutions, well-type synonyms, and the per-zone
//! summary keywords) are carried as an explicit configuration record rather
//! than module-level state, so multiple engine instances can coexist with
//! different settings. Defaults come from [`crate::constants`].

use crate::constants::{
    self, DEFAULT_FLAG, DEFAULT_LOCATION, DEFAULT_REGION, keywords, zones,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Constant field values stamped onto every canonical record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDefaults {
    /// Opaque record flag; semantics undocumented upstream, preserved as-is
    pub flag: String,

    /// Region label for this engine deployment
    pub region: String,

    /// Location classification applied to every record
    pub location: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            flag: DEFAULT_FLAG.to_string(),
            region: DEFAULT_REGION.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// Per-zone summary section keyword literals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryKeywords {
    /// Zone 1 next-plan delimiter (matched case-insensitively, optional space before colon)
    pub zone_1_next_plan: String,

    /// Zone 2&3 summary-report delimiter
    pub zone_23_summary: String,

    /// Zone 2&3 current-status delimiter (followed by an H:MM / HH:MM time token)
    pub zone_23_status: String,

    /// Zone 2&3 next-plan delimiter
    pub zone_23_next_plan: String,

    /// Zone 4 current-status delimiter (time token optional)
    pub zone_4_status: String,

    /// Zone 4 next-plan delimiter
    pub zone_4_next_plan: String,
}

impl Default for SummaryKeywords {
    fn default() -> Self {
        Self {
            zone_1_next_plan: keywords::ZONE_1_NEXT_PLAN.to_string(),
            zone_23_summary: keywords::ZONE_23_SUMMARY.to_string(),
            zone_23_status: keywords::ZONE_23_STATUS.to_string(),
            zone_23_next_plan: keywords::ZONE_23_NEXT_PLAN.to_string(),
            zone_4_status: keywords::ZONE_4_STATUS.to_string(),
            zone_4_next_plan: keywords::ZONE_4_NEXT_PLAN.to_string(),
        }
    }
}

/// Complete engine configuration
///
/// Inspectable and overridable per engine instance; the domain-fixed tables
/// (keyword lists, APH mapping, rig substitutions, well-type synonyms) are
/// exposed here rather than hardcoded in the extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Constant field values for every record
    pub defaults: RecordDefaults,

    /// APH classification code per canonical zone label
    pub aph_by_zone: HashMap<String, String>,

    /// Exact-match rig-name substitutions (Zone 4), applied after prefix strip
    pub rig_replacements: Vec<(String, String)>,

    /// Exact-match well-type synonym substitutions, applied across zones
    pub well_type_synonyms: Vec<(String, String)>,

    /// Summary section keyword literals per zone
    pub summary_keywords: SummaryKeywords,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            defaults: RecordDefaults::default(),
            aph_by_zone: constants::DEFAULT_APH_BY_ZONE
                .iter()
                .map(|(zone, code)| (zone.to_string(), code.to_string()))
                .collect(),
            rig_replacements: constants::DEFAULT_RIG_REPLACEMENTS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            well_type_synonyms: constants::DEFAULT_WELL_TYPE_SYNONYMS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            summary_keywords: SummaryKeywords::default(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration consistency
    ///
    /// The APH mapping must be total over the supported zones, the record
    /// defaults must be non-empty, and every keyword literal must be
    /// non-empty (an empty keyword would match everywhere).
    pub fn validate(&self) -> Result<()> {
        if self.defaults.flag.trim().is_empty() {
            return Err(Error::configuration("Record flag cannot be empty"));
        }
        if self.defaults.region.trim().is_empty() {
            return Err(Error::configuration("Region label cannot be empty"));
        }
        if self.defaults.location.trim().is_empty() {
            return Err(Error::configuration("Location label cannot be empty"));
        }

        for zone in [zones::ZONE_1, zones::ZONE_23, zones::ZONE_4] {
            match self.aph_by_zone.get(zone) {
                Some(code) if !code.trim().is_empty() => {}
                Some(_) => {
                    return Err(Error::configuration(format!(
                        "APH code for zone '{}' cannot be empty",
                        zone
                    )));
                }
                None => {
                    return Err(Error::configuration(format!(
                        "APH mapping is missing zone '{}'",
                        zone
                    )));
                }
            }
        }

        let kw = &self.summary_keywords;
        for (name, literal) in [
            ("zone_1_next_plan", &kw.zone_1_next_plan),
            ("zone_23_summary", &kw.zone_23_summary),
            ("zone_23_status", &kw.zone_23_status),
            ("zone_23_next_plan", &kw.zone_23_next_plan),
            ("zone_4_status", &kw.zone_4_status),
            ("zone_4_next_plan", &kw.zone_4_next_plan),
        ] {
            if literal.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Summary keyword '{}' cannot be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Look up the APH code configured for a canonical zone label
    pub fn aph_code(&self, zone_label: &str) -> Option<&str> {
        self.aph_by_zone.get(zone_label).map(|s| s.as_str())
    }
}
