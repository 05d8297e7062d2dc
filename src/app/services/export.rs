//! Tabular boundary for the presentation/export collaborator
//!
//! Converts the canonical record batch into a polars DataFrame with the
//! fixed 19-column order, and provides the report-date filter and the
//! tab-separated export (no header, no index column) that downstream
//! consumers expect.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;
use tracing::debug;

use crate::app::models::CanonicalRecord;
use crate::constants::{CANONICAL_DATE_FORMAT, SCHEMA_COLUMNS, columns};
use crate::{Error, Result};

/// Convert a canonical batch into a DataFrame in the fixed column order.
///
/// All columns are strings; dates are rendered in the canonical
/// `%Y-%m-%d` form, which keeps equality filtering trivial downstream.
pub fn to_dataframe(records: &[CanonicalRecord]) -> Result<DataFrame> {
    debug!(
        "Converting {} canonical records to a {}-column DataFrame",
        records.len(),
        SCHEMA_COLUMNS.len()
    );

    let rows: Vec<[String; 19]> = records.iter().map(|r| r.ordered_values()).collect();
    let frame_columns: Vec<Column> = SCHEMA_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values: Vec<String> = rows.iter().map(|row| row[index].clone()).collect();
            Series::new((*name).into(), values).into()
        })
        .collect();

    DataFrame::new(frame_columns)
        .map_err(|e| Error::table_export("Failed to build canonical DataFrame", e))
}

/// Keep only rows whose `Report Date` equals the given calendar date
pub fn filter_by_report_date(frame: &DataFrame, date: NaiveDate) -> Result<DataFrame> {
    let date_value = date.format(CANONICAL_DATE_FORMAT).to_string();
    frame
        .clone()
        .lazy()
        .filter(col(columns::REPORT_DATE).eq(lit(date_value)))
        .collect()
        .map_err(|e| Error::table_export("Failed to filter by report date", e))
}

/// Write the table as tab-separated values, without header or index column
pub fn write_tsv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create export file '{}'", path.display()), e))?;

    CsvWriter::new(file)
        .with_separator(b'\t')
        .include_header(false)
        .finish(frame)
        .map_err(|e| Error::table_export(format!("Failed to write '{}'", path.display()), e))
}

/// Default export file name for a report date, e.g. `2026-02-12.tsv`
pub fn default_export_filename(report_date: NaiveDate) -> String {
    format!("{}.tsv", report_date.format(CANONICAL_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{RawReportRow, ZoneTag};
    use crate::app::services::engine::NormalizationEngine;

    fn test_records(report_day: u32) -> Vec<CanonicalRecord> {
        let date = NaiveDate::from_ymd_opt(2026, 2, report_day).unwrap();
        let rows = vec![
            RawReportRow::new(
                ZoneTag::Zone1,
                "RNT-DZ51/P-475",
                "Rig PDSI #28.2",
                "Development",
                "Did X. Plan: Do Y.",
                date,
            ),
            RawReportRow::new(
                ZoneTag::Zone4,
                "KSO-P18 (KSO-P18A)",
                "Rig OW-7",
                "Development",
                "Done. Plan: demob.",
                date,
            ),
        ];
        let engine = NormalizationEngine::new().unwrap();
        engine.normalize(&rows).unwrap().records
    }

    #[test]
    fn test_dataframe_has_fixed_column_order() {
        let frame = to_dataframe(&test_records(12)).unwrap();
        assert_eq!(frame.height(), 2);
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, SCHEMA_COLUMNS.to_vec());
    }

    #[test]
    fn test_empty_batch_yields_empty_frame_with_schema() {
        let frame = to_dataframe(&[]).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), SCHEMA_COLUMNS.len());
    }

    #[test]
    fn test_filter_by_report_date() {
        let mut records = test_records(12);
        records.extend(test_records(13));
        let frame = to_dataframe(&records).unwrap();

        let filtered =
            filter_by_report_date(&frame, NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()).unwrap();
        assert_eq!(filtered.height(), 2);

        let none =
            filter_by_report_date(&frame, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()).unwrap();
        assert_eq!(none.height(), 0);
    }

    #[test]
    fn test_tsv_export_has_no_header() {
        let mut frame = to_dataframe(&test_records(12)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        write_tsv(&mut frame, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(!content.contains("Flag\t"));
        assert!(content.contains("INC\t"));
        assert!(content.contains("\tPEP\t"));
        assert!(content.contains("2026-02-12"));
    }

    #[test]
    fn test_default_export_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
        assert_eq!(default_export_filename(date), "2026-02-12.tsv");
    }
}
