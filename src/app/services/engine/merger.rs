//! Fixed-order batch merging

use crate::app::models::{CanonicalRecord, ZoneTag};
use crate::app::services::zone_parser::ZoneBatch;

/// Concatenate zone batches into the final canonical table.
///
/// Batches are ordered by the fixed zone order (Zone 1, Zone 2&3, Zone 4)
/// regardless of the order they arrive in; each batch's internal order is
/// preserved. No deduplication, no cross-zone validation.
pub fn merge(batches: Vec<ZoneBatch>) -> Vec<CanonicalRecord> {
    let mut ordered = batches;
    ordered.sort_by_key(|batch| {
        ZoneTag::PROCESSING_ORDER
            .iter()
            .position(|zone| *zone == batch.zone)
    });
    ordered.into_iter().flat_map(|batch| batch.records).collect()
}
