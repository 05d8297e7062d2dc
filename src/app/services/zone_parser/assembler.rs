//! Canonical record assembly

use crate::app::models::{CanonicalRecord, RawReportRow, SummarySections, WellNameParts};
use crate::config::EngineConfig;
use crate::{Error, Result};

/// Assembles one canonical record per raw row from its extracted fields.
///
/// Fills every schema field the extractors do not produce with empty string,
/// applies the configured Flag/Region/Location constants, derives APH from
/// the zone, normalizes well-type synonyms, and validates the finished
/// record against the schema invariant.
#[derive(Debug, Clone)]
pub struct RecordAssembler<'a> {
    config: &'a EngineConfig,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Compose a canonical record from a raw row and its extracted fields
    pub fn assemble(
        &self,
        row: &RawReportRow,
        well_name: WellNameParts,
        sections: SummarySections,
        rig_name: String,
    ) -> Result<CanonicalRecord> {
        let zone_label = row.zone.label();
        let aph = self.config.aph_code(zone_label).ok_or_else(|| {
            Error::configuration(format!("APH mapping is missing zone '{}'", zone_label))
        })?;

        // Uniform cleanup applied across zones: any leading "-" carried into
        // the plan section is stripped from the merged table
        let next_plan = sections.next_plan.trim_start_matches('-').trim().to_string();

        let record = CanonicalRecord {
            flag: self.config.defaults.flag.clone(),
            region: self.config.defaults.region.clone(),
            zone: zone_label.to_string(),
            aph: aph.to_string(),
            rig_name,
            well_name: well_name.primary,
            well_name_2: well_name.secondary,
            well_type: self.normalize_well_type(&row.well_type),
            location: self.config.defaults.location.clone(),
            spud_date: String::new(),
            release_date: String::new(),
            status: String::new(),
            status_code_1: String::new(),
            status_code_2: String::new(),
            summary_report: sections.summary_report,
            current_status: sections.current_status,
            next_plan,
            report_date: row.report_date,
            operation_date: row.operation_date,
        };

        record.validate()?;
        Ok(record)
    }

    /// Apply the configured well-type synonym table (exact match)
    fn normalize_well_type(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        self.config
            .well_type_synonyms
            .iter()
            .find(|(from, _)| from == trimmed)
            .map(|(_, to)| to.clone())
            .unwrap_or_else(|| trimmed.to_string())
    }
}
