//! Zone batch parsing

use tracing::debug;

use super::assembler::RecordAssembler;
use super::stats::ZoneStats;
use crate::app::models::{CanonicalRecord, RawReportRow, ZoneTag};
use crate::app::services::extractors::{normalize_rig_name, split_summary, split_well_name};
use crate::app::services::grammar::ZoneGrammar;
use crate::Result;

/// One zone's canonical output batch, internally ordered per the zone's
/// sort policy
#[derive(Debug, Clone)]
pub struct ZoneBatch {
    pub zone: ZoneTag,
    pub records: Vec<CanonicalRecord>,
    pub stats: ZoneStats,
}

/// Applies one zone's grammar to that zone's partition of a raw batch.
///
/// Rows tagged for other zones are ignored here: each parser owns exactly
/// its own partition, so zones can be processed independently.
#[derive(Debug, Clone)]
pub struct ZoneParser<'a> {
    grammar: &'a ZoneGrammar,
}

impl<'a> ZoneParser<'a> {
    pub fn new(grammar: &'a ZoneGrammar) -> Self {
        Self { grammar }
    }

    /// Parse the zone's rows into canonical records.
    ///
    /// Extraction is row-local and never fails; Zone 2&3 and Zone 4 sort
    /// their batch by normalized rig name (stable, ordinal) before assembly,
    /// Zone 1 preserves input order.
    pub fn parse_batch(
        &self,
        rows: &[RawReportRow],
        assembler: &RecordAssembler,
    ) -> Result<ZoneBatch> {
        let zone = self.grammar.zone;
        let mut stats = ZoneStats::new(zone);
        let mut extracted = Vec::new();

        for row in rows.iter().filter(|row| row.zone == zone) {
            stats.rows_processed += 1;

            let well_name = split_well_name(&row.well_name, self.grammar);
            if well_name.is_fallback() {
                stats.well_name_fallbacks += 1;
            }

            let sections = split_summary(&row.summary, self.grammar);
            if sections.is_fallback() {
                stats.summary_fallbacks += 1;
            }

            let rig_name = normalize_rig_name(&row.rig_name, self.grammar);
            extracted.push((row, well_name, sections, rig_name));
        }

        if self.grammar.sort_by_rig_name {
            extracted.sort_by(|a, b| a.3.cmp(&b.3));
        }

        let mut records = Vec::with_capacity(extracted.len());
        for (row, well_name, sections, rig_name) in extracted {
            let record =
                assembler.assemble(row, well_name.into_value(), sections.into_value(), rig_name)?;
            records.push(record);
        }
        stats.records_assembled = records.len();

        debug!(
            "Parsed {} rows for {} ({} well-name fallbacks, {} summary fallbacks)",
            stats.rows_processed, zone, stats.well_name_fallbacks, stats.summary_fallbacks
        );

        Ok(ZoneBatch {
            zone,
            records,
            stats,
        })
    }
}
