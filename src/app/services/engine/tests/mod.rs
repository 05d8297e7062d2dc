//! Test utilities for engine orchestration

use chrono::NaiveDate;

use crate::app::models::{RawReportRow, ZoneTag};


/// Helper report date shared by the test rows
pub fn test_report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
}

/// Helper to build one representative raw row per zone, deliberately out
/// of merge order
pub fn scrambled_rows() -> Vec<RawReportRow> {
    vec![
        RawReportRow::new(
            ZoneTag::Zone4,
            "KSO-P18 (KSO-P18A)",
            "Rig Airlangga #55",
            "Development",
            "Drilled. Status Pagi 05:00: ok. Plan: continue.",
            test_report_date(),
        ),
        RawReportRow::new(
            ZoneTag::Zone1,
            "RNT-DZ51/P-475",
            "Rig PDSI #28.2",
            "Development",
            "Did X. Plan: Do Y.",
            test_report_date(),
        ),
        RawReportRow::new(
            ZoneTag::Zone23,
            "Benggala\n(BGU-01)\n(BGU-A1)",
            "RIG-1",
            "Eksplorasi",
            "Laporan: -did work\nStatus Pagi 06:00: ongoing\nRencana: continue",
            test_report_date(),
        ),
    ]
}
