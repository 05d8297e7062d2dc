//! Data models for daily drilling report normalization
//!
//! This module contains the core data structures for representing raw report
//! rows, intermediate extraction results, and the canonical 19-field output
//! record shared by all zones.

use crate::constants::{CANONICAL_DATE_FORMAT, source_zones, zones};
use crate::{Error, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Zone Tag
// =============================================================================

/// Identifier of an organizational reporting zone.
///
/// Each zone encodes the same real-world facts with different textual
/// conventions; the tag selects which grammar applies to a row. Rows carrying
/// any other tag never reach the engine: parsing a label is fallible and the
/// ingestion layer drops what it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneTag {
    /// Zone 1: slash-delimited well names, English "Plan:" delimiter
    Zone1,
    /// Zone 2&3: stacked parenthetical well names, Indonesian keywords
    Zone23,
    /// Zone 4: inline parenthetical well names, keywordless leading summary
    Zone4,
}

impl ZoneTag {
    /// Fixed processing and merge order: Zone 1, then Zone 2&3, then Zone 4
    pub const PROCESSING_ORDER: [ZoneTag; 3] = [ZoneTag::Zone1, ZoneTag::Zone23, ZoneTag::Zone4];

    /// Canonical zone label as it appears in the output table
    pub fn label(self) -> &'static str {
        match self {
            ZoneTag::Zone1 => zones::ZONE_1,
            ZoneTag::Zone23 => zones::ZONE_23,
            ZoneTag::Zone4 => zones::ZONE_4,
        }
    }
}

impl FromStr for ZoneTag {
    type Err = Error;

    /// Parse a zone tag from a canonical label or its source-sheet
    /// (Indonesian) form. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            zones::ZONE_1 | source_zones::ZONE_1 => Ok(ZoneTag::Zone1),
            zones::ZONE_23 | source_zones::ZONE_23 => Ok(ZoneTag::Zone23),
            zones::ZONE_4 | source_zones::ZONE_4 => Ok(ZoneTag::Zone4),
            other => Err(Error::unrecognized_zone(other)),
        }
    }
}

impl fmt::Display for ZoneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Extraction Result
// =============================================================================

/// Result of a grammar-driven extraction, tagged with how it was produced.
///
/// Every extractor degrades gracefully on pattern misses. A raw value is
/// substituted into a default slot instead of failing the record, but the
/// two outcomes stay distinguishable so statistics and tests can tell a
/// clean parse from a best-effort substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The grammar pattern matched; fields were split as specified
    Parsed(T),
    /// The pattern missed; the documented fallback produced the fields
    Fallback(T),
}

impl<T> Extraction<T> {
    /// Borrow the extracted value regardless of how it was produced
    pub fn value(&self) -> &T {
        match self {
            Extraction::Parsed(v) | Extraction::Fallback(v) => v,
        }
    }

    /// Consume the extraction, returning the value
    pub fn into_value(self) -> T {
        match self {
            Extraction::Parsed(v) | Extraction::Fallback(v) => v,
        }
    }

    /// True when the documented fallback produced the value
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }

    /// Map the extracted value, preserving the tag
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        match self {
            Extraction::Parsed(v) => Extraction::Parsed(f(v)),
            Extraction::Fallback(v) => Extraction::Fallback(f(v)),
        }
    }
}

// =============================================================================
// Intermediate Field Groups
// =============================================================================

/// Primary and secondary well identifiers produced by the well-name splitter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WellNameParts {
    /// Primary well identifier ("Well Name")
    pub primary: String,
    /// Secondary/alternate identifier ("Well Name [2]")
    pub secondary: String,
}

impl WellNameParts {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// The three narrative sections produced by the summary splitter.
///
/// Every section is always present; an absent keyword yields an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarySections {
    pub summary_report: String,
    pub current_status: String,
    pub next_plan: String,
}

// =============================================================================
// Raw Report Row
// =============================================================================

/// One raw input unit from the ingestion collaborator.
///
/// The zone tag has already been resolved to a supported zone; the dates are
/// resolved upstream with `operation_date = report_date - 1 day` as a fixed
/// business rule. A row is consumed exactly once by the parser matching its
/// tag and produces exactly one canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReportRow {
    /// Supported zone this row belongs to
    pub zone: ZoneTag,

    /// Compound well-name cell text, conventions varying by zone
    pub well_name: String,

    /// Rig name cell text, possibly prefixed or historically inconsistent
    pub rig_name: String,

    /// Well type / activity kind cell text
    pub well_type: String,

    /// Narrative summary cell text with zone-specific delimiter keywords
    pub summary: String,

    /// Date stated by the report (from the source filename token)
    pub report_date: NaiveDate,

    /// Calendar date the operations occurred: report date minus one day
    pub operation_date: NaiveDate,
}

impl RawReportRow {
    /// Create a raw row, deriving the operation date from the report date
    pub fn new(
        zone: ZoneTag,
        well_name: impl Into<String>,
        rig_name: impl Into<String>,
        well_type: impl Into<String>,
        summary: impl Into<String>,
        report_date: NaiveDate,
    ) -> Self {
        Self {
            zone,
            well_name: well_name.into(),
            rig_name: rig_name.into(),
            well_type: well_type.into(),
            summary: summary.into(),
            report_date,
            // checked_sub_days only fails at NaiveDate::MIN
            operation_date: report_date
                .checked_sub_days(Days::new(1))
                .unwrap_or(report_date),
        }
    }
}

// =============================================================================
// Canonical Record
// =============================================================================

/// The canonical output entity: one row of the fixed 19-field schema.
///
/// Invariant: every field is present for every record; empty string is a
/// valid value, absence is not. Field order in the output table is fixed and
/// independent of zone; see [`crate::constants::SCHEMA_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Opaque record flag (constant per engine configuration)
    pub flag: String,
    /// Region label (constant per engine configuration)
    pub region: String,
    /// Canonical zone label
    pub zone: String,
    /// Derived APH classification code (PEP or PHR)
    pub aph: String,
    /// Normalized rig display name
    pub rig_name: String,
    /// Primary well identifier
    pub well_name: String,
    /// Secondary/alternate well identifier
    pub well_name_2: String,
    /// Well type, synonym-normalized
    pub well_type: String,
    /// Location classification (constant per engine configuration)
    pub location: String,
    /// Not produced by this engine; always empty
    pub spud_date: String,
    /// Not produced by this engine; always empty
    pub release_date: String,
    /// Not produced by this engine; always empty
    pub status: String,
    /// Not produced by this engine; always empty
    pub status_code_1: String,
    /// Not produced by this engine; always empty
    pub status_code_2: String,
    /// Narrative summary of completed work
    pub summary_report: String,
    /// Narrative status as of the morning report cut-off
    pub current_status: String,
    /// Narrative plan for the next period
    pub next_plan: String,
    /// Date stated by the report
    pub report_date: NaiveDate,
    /// Report date minus one day
    pub operation_date: NaiveDate,
}

impl CanonicalRecord {
    /// Validate the canonical schema invariant.
    ///
    /// The constant and derived fields must be populated; a miss here is a
    /// defect in assembly, not in the input, and fails loudly.
    pub fn validate(&self) -> Result<()> {
        if self.flag.trim().is_empty() {
            return Err(Error::schema_violation("Flag must be populated"));
        }
        if self.region.trim().is_empty() {
            return Err(Error::schema_violation("Region must be populated"));
        }
        if !matches!(
            self.zone.as_str(),
            zones::ZONE_1 | zones::ZONE_23 | zones::ZONE_4
        ) {
            return Err(Error::schema_violation(format!(
                "Zone '{}' is not a canonical zone label",
                self.zone
            )));
        }
        if self.aph.trim().is_empty() {
            return Err(Error::schema_violation("APH must be populated"));
        }
        if self.location.trim().is_empty() {
            return Err(Error::schema_violation("Location must be populated"));
        }
        Ok(())
    }

    /// Project the record onto the fixed 19-column order.
    ///
    /// Dates are rendered in the canonical `%Y-%m-%d` form. The result lines
    /// up index-for-index with [`crate::constants::SCHEMA_COLUMNS`].
    pub fn ordered_values(&self) -> [String; 19] {
        [
            self.flag.clone(),
            self.region.clone(),
            self.zone.clone(),
            self.aph.clone(),
            self.rig_name.clone(),
            self.well_name.clone(),
            self.well_name_2.clone(),
            self.well_type.clone(),
            self.location.clone(),
            self.spud_date.clone(),
            self.release_date.clone(),
            self.status.clone(),
            self.status_code_1.clone(),
            self.status_code_2.clone(),
            self.summary_report.clone(),
            self.current_status.clone(),
            self.next_plan.clone(),
            self.report_date.format(CANONICAL_DATE_FORMAT).to_string(),
            self.operation_date.format(CANONICAL_DATE_FORMAT).to_string(),
        ]
    }
}
