//! Per-zone extraction statistics

use crate::app::models::ZoneTag;

/// Extraction statistics for one zone's batch
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ZoneStats {
    /// Zone the batch belongs to
    pub zone: ZoneTag,

    /// Raw rows consumed from the zone's partition
    pub rows_processed: usize,

    /// Canonical records assembled (one per row)
    pub records_assembled: usize,

    /// Well-name extractions that used the documented fallback
    pub well_name_fallbacks: usize,

    /// Summary extractions that used the documented fallback
    pub summary_fallbacks: usize,
}

impl ZoneStats {
    /// Create empty statistics for a zone
    pub fn new(zone: ZoneTag) -> Self {
        Self {
            zone,
            rows_processed: 0,
            records_assembled: 0,
            well_name_fallbacks: 0,
            summary_fallbacks: 0,
        }
    }

    /// Fraction of extractions that matched their grammar cleanly
    pub fn clean_rate(&self) -> f64 {
        let attempts = self.rows_processed * 2;
        if attempts == 0 {
            return 1.0;
        }
        let fallbacks = self.well_name_fallbacks + self.summary_fallbacks;
        (attempts - fallbacks) as f64 / attempts as f64
    }
}
