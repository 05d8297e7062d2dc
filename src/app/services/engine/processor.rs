//! The normalization engine and its output table

use tracing::{debug, info};

use super::merger;
use crate::app::models::{CanonicalRecord, RawReportRow, ZoneTag};
use crate::app::services::grammar::GrammarRegistry;
use crate::app::services::zone_parser::{RecordAssembler, ZoneBatch, ZoneParser, ZoneStats};
use crate::config::EngineConfig;
use crate::{Error, Result};

/// The final canonical table with per-zone extraction statistics.
///
/// Records are grouped by zone in the fixed order Zone 1, Zone 2&3, Zone 4;
/// the table is immutable once produced and handed to the presentation or
/// export collaborator as-is.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub records: Vec<CanonicalRecord>,
    pub zone_stats: Vec<ZoneStats>,
}

impl NormalizedTable {
    fn from_batches(batches: Vec<ZoneBatch>) -> Self {
        let zone_stats = batches.iter().map(|batch| batch.stats.clone()).collect();
        let records = merger::merge(batches);
        Self {
            records,
            zone_stats,
        }
    }

    /// Number of canonical records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no zone produced any record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total extractions across zones that used a documented fallback
    pub fn total_fallbacks(&self) -> usize {
        self.zone_stats
            .iter()
            .map(|stats| stats.well_name_fallbacks + stats.summary_fallbacks)
            .sum()
    }
}

/// Per-region report normalization engine.
///
/// Holds the validated configuration and the compiled grammar registry;
/// multiple engine instances with different settings can coexist.
#[derive(Debug, Clone)]
pub struct NormalizationEngine {
    config: EngineConfig,
    registry: GrammarRegistry,
}

impl NormalizationEngine {
    /// Create an engine with the default Region 1 configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let registry = GrammarRegistry::new(&config)?;
        Ok(Self { config, registry })
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine's compiled grammar registry
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Normalize a raw batch into the canonical table.
    ///
    /// Zones are processed in the fixed order Zone 1, Zone 2&3, Zone 4;
    /// each parser consumes only its own partition, so one row produces
    /// exactly one record and row order within a zone follows the zone's
    /// sort policy.
    pub fn normalize(&self, rows: &[RawReportRow]) -> Result<NormalizedTable> {
        debug!("Normalizing batch of {} raw rows", rows.len());
        let assembler = RecordAssembler::new(&self.config);

        let mut batches = Vec::with_capacity(ZoneTag::PROCESSING_ORDER.len());
        for zone in ZoneTag::PROCESSING_ORDER {
            let parser = ZoneParser::new(self.registry.get(zone));
            batches.push(parser.parse_batch(rows, &assembler)?);
        }

        let table = NormalizedTable::from_batches(batches);
        info!(
            "Normalized {} rows into {} canonical records ({} fallbacks)",
            rows.len(),
            table.len(),
            table.total_fallbacks()
        );
        Ok(table)
    }

    /// Normalize with the three zone partitions processed concurrently.
    ///
    /// Each task owns its own filtered partition, so no state is shared;
    /// the merge order stays fixed regardless of task completion order and
    /// the result is identical to [`normalize`](Self::normalize).
    pub async fn normalize_concurrent(&self, rows: &[RawReportRow]) -> Result<NormalizedTable> {
        debug!(
            "Normalizing batch of {} raw rows across {} zone tasks",
            rows.len(),
            ZoneTag::PROCESSING_ORDER.len()
        );

        let tasks: Vec<_> = ZoneTag::PROCESSING_ORDER
            .into_iter()
            .map(|zone| {
                let config = self.config.clone();
                let grammar = self.registry.get(zone).clone();
                let partition: Vec<RawReportRow> = rows
                    .iter()
                    .filter(|row| row.zone == zone)
                    .cloned()
                    .collect();
                tokio::task::spawn_blocking(move || {
                    let assembler = RecordAssembler::new(&config);
                    ZoneParser::new(&grammar).parse_batch(&partition, &assembler)
                })
            })
            .collect();

        let mut batches = Vec::with_capacity(tasks.len());
        for joined in futures::future::join_all(tasks).await {
            let batch = joined
                .map_err(|e| Error::processing_interrupted(format!("Zone task failed: {}", e)))??;
            batches.push(batch);
        }

        Ok(NormalizedTable::from_batches(batches))
    }
}
