//! Application constants for the DDR processor
//!
//! This module contains the canonical schema definition, zone labels,
//! default field values, and the domain-fixed lookup tables used
//! throughout the report normalization engine.

// =============================================================================
// Canonical Schema
// =============================================================================

/// The fixed 19-column canonical record schema, in output order.
///
/// Every assembled record carries all of these fields; empty string is a
/// valid value, absence is not. The order is independent of source zone.
pub const SCHEMA_COLUMNS: &[&str; 19] = &[
    columns::FLAG,
    columns::REGION,
    columns::ZONE,
    columns::APH,
    columns::RIG_NAME,
    columns::WELL_NAME,
    columns::WELL_NAME_2,
    columns::WELL_TYPE,
    columns::LOCATION,
    columns::SPUD_DATE,
    columns::RELEASE_DATE,
    columns::STATUS,
    columns::STATUS_CODE_1,
    columns::STATUS_CODE_2,
    columns::SUMMARY_REPORT,
    columns::CURRENT_STATUS,
    columns::NEXT_PLAN,
    columns::REPORT_DATE,
    columns::OPERATION_DATE,
];

/// Canonical column names
pub mod columns {
    pub const FLAG: &str = "Flag";
    pub const REGION: &str = "Region";
    pub const ZONE: &str = "Zone";
    pub const APH: &str = "APH";
    pub const RIG_NAME: &str = "Rig Name";
    pub const WELL_NAME: &str = "Well Name";
    pub const WELL_NAME_2: &str = "Well Name [2]";
    pub const WELL_TYPE: &str = "Well Type";
    pub const LOCATION: &str = "Location";
    pub const SPUD_DATE: &str = "Spud Date";
    pub const RELEASE_DATE: &str = "Release Date";
    pub const STATUS: &str = "Status";
    pub const STATUS_CODE_1: &str = "Status Code [1]";
    pub const STATUS_CODE_2: &str = "Status Code [2]";
    pub const SUMMARY_REPORT: &str = "Summary Report";
    pub const CURRENT_STATUS: &str = "Current Status";
    pub const NEXT_PLAN: &str = "Next Plan";
    pub const REPORT_DATE: &str = "Report Date";
    pub const OPERATION_DATE: &str = "Operation Date";
}

// =============================================================================
// Zone Labels and Source Aliases
// =============================================================================

/// Canonical zone labels as they appear in the output table
pub mod zones {
    pub const ZONE_1: &str = "Zone 1";
    pub const ZONE_23: &str = "Zone 2&3";
    pub const ZONE_4: &str = "Zone 4";
}

/// Source-sheet zone labels (Indonesian), accepted at the ingestion boundary
pub mod source_zones {
    pub const ZONE_1: &str = "Zona 1";
    pub const ZONE_23: &str = "Zona 2 & 3";
    pub const ZONE_4: &str = "Zona 4";
}

/// Accepted header aliases for each raw-row input column.
///
/// The first entry of each list is the canonical name; the rest are the
/// source-sheet names. Header cells are trimmed before matching (the source
/// sheet carries a trailing space in "Kegiatan ").
pub mod source_columns {
    pub const ZONE: &[&str] = &["Zone", "Zona"];
    pub const WELL_NAME: &[&str] = &["Well Name", "Nama Sumur"];
    pub const RIG_NAME: &[&str] = &["Rig Name", "RIG"];
    pub const WELL_TYPE: &[&str] = &["Well Type", "Jenis Kegiatan"];
    pub const SUMMARY: &[&str] = &["Summary Report", "Kegiatan"];
}

// =============================================================================
// Record Defaults and Derived-Field Tables
// =============================================================================

/// Default constant field values applied to every record
pub const DEFAULT_FLAG: &str = "INC";
pub const DEFAULT_REGION: &str = "Region 1";
pub const DEFAULT_LOCATION: &str = "Onshore";

/// APH classification codes
pub mod aph {
    pub const PEP: &str = "PEP";
    pub const PHR: &str = "PHR";
}

/// Default APH mapping, keyed by canonical zone label
pub const DEFAULT_APH_BY_ZONE: &[(&str, &str)] = &[
    (zones::ZONE_1, aph::PEP),
    (zones::ZONE_23, aph::PHR),
    (zones::ZONE_4, aph::PEP),
];

/// Literal rig-name substitutions for historically inconsistent Zone 4 names.
///
/// Applied after the "Rig" prefix strip, exact match only.
pub const DEFAULT_RIG_REPLACEMENTS: &[(&str, &str)] = &[
    ("Airlangga #55", "Airlangga-55"),
    ("PDSI ACS#21", "ACS-21"),
    ("#36.1/Skytop 650M", "PDSI #36.1/Skytop 650M"),
];

/// Well-type synonym substitutions applied uniformly across zones
pub const DEFAULT_WELL_TYPE_SYNONYMS: &[(&str, &str)] = &[("Eksplorasi", "Exploration")];

// =============================================================================
// Summary Section Keywords
// =============================================================================

/// Per-zone summary delimiter keyword literals
pub mod keywords {
    /// Zone 1: "Plan:" (case-insensitive, optional space before the colon)
    pub const ZONE_1_NEXT_PLAN: &str = "Plan";

    /// Zone 2&3: Indonesian section keywords, fixed order
    pub const ZONE_23_SUMMARY: &str = "Laporan";
    pub const ZONE_23_STATUS: &str = "Status Pagi";
    pub const ZONE_23_NEXT_PLAN: &str = "Rencana";

    /// Zone 4: keywordless leading summary, then English keywords
    pub const ZONE_4_STATUS: &str = "Status Pagi";
    pub const ZONE_4_NEXT_PLAN: &str = "Plan";
}

// =============================================================================
// Encoding Artifacts and Text Tokens
// =============================================================================

/// Spreadsheet carriage-return artifact normalized to a newline before splitting
pub const CARRIAGE_RETURN_ARTIFACT: &str = "_x000D_";

/// Zero-width control characters stripped from Zone 4 well names
pub const ZERO_WIDTH_CHARS: &[char] = &['\u{2060}', '\u{200B}', '\u{FEFF}'];

/// Literal token stripped from the front of Zone 1 / Zone 4 rig names
pub const RIG_PREFIX_TOKEN: &str = "Rig";

/// Rig-name prefix whose trailing whitespace gap is collapsed in Zone 4
pub const PDSI_PREFIX: &str = "PDSI #";

// =============================================================================
// Date Handling
// =============================================================================

/// Date format used in the canonical table and export filenames
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Filename token pattern carrying the report date, e.g. "tanggal 12 Feb 2026"
pub const FILENAME_DATE_PATTERN: &str = r"tanggal (\d{1,2}) (\w{3}) (\d{4})";

/// Format of the filename date token once extracted
pub const FILENAME_DATE_FORMAT: &str = "%d %b %Y";

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the default APH code for a canonical zone label
pub fn default_aph_code(zone_label: &str) -> Option<&'static str> {
    DEFAULT_APH_BY_ZONE
        .iter()
        .find(|(zone, _)| *zone == zone_label)
        .map(|(_, code)| *code)
}

/// Check whether a label names one of the supported zones (canonical or source form)
pub fn is_supported_zone_label(label: &str) -> bool {
    matches!(
        label.trim(),
        zones::ZONE_1
            | zones::ZONE_23
            | zones::ZONE_4
            | source_zones::ZONE_1
            | source_zones::ZONE_23
            | source_zones::ZONE_4
    )
}

/// Position of a column in the canonical schema, if it is part of it
pub fn schema_column_index(column: &str) -> Option<usize> {
    SCHEMA_COLUMNS.iter().position(|c| *c == column)
}
