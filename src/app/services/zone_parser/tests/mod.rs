//! Test utilities for zone parsing and assembly

use chrono::NaiveDate;

use crate::app::models::{RawReportRow, SummarySections, WellNameParts, ZoneTag};
use crate::app::services::grammar::GrammarRegistry;
use crate::config::EngineConfig;


/// Helper report date shared by the test rows
pub fn test_report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
}

/// Helper to build a raw row with a given zone and well/rig/summary text
pub fn create_test_row(
    zone: ZoneTag,
    well_name: &str,
    rig_name: &str,
    summary: &str,
) -> RawReportRow {
    RawReportRow::new(
        zone,
        well_name,
        rig_name,
        "Development",
        summary,
        test_report_date(),
    )
}

/// Helper to build the default grammar registry
pub fn default_registry() -> GrammarRegistry {
    GrammarRegistry::new(&EngineConfig::default()).unwrap()
}

/// Helper for plain well-name parts
pub fn parts(primary: &str, secondary: &str) -> WellNameParts {
    WellNameParts::new(primary, secondary)
}

/// Helper for plain summary sections
pub fn sections(summary: &str, status: &str, plan: &str) -> SummarySections {
    SummarySections {
        summary_report: summary.to_string(),
        current_status: status.to_string(),
        next_plan: plan.to_string(),
    }
}
