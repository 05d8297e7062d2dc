//! Raw-row ingestion from CSV extracts
//!
//! Reads pre-extracted daily-report rows from a CSV file at the ingestion
//! boundary: header aliases are resolved against both the canonical and the
//! source-sheet column names, rows with unsupported zone tags are dropped
//! (a documented filter, never an error), and the report date is resolved
//! from an explicit override or the filename date token. Spreadsheet
//! loading and sheet discovery stay outside this tool.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, warn};

use crate::app::models::{RawReportRow, ZoneTag};
use crate::constants::{FILENAME_DATE_FORMAT, FILENAME_DATE_PATTERN, source_columns};
use crate::{Error, Result};

/// Resolved input column indices for one raw-row extract
#[derive(Debug, Clone, Copy)]
struct ResolvedColumns {
    zone: usize,
    well_name: usize,
    rig_name: usize,
    well_type: usize,
    summary: usize,
}

/// Outcome of reading a raw-row extract
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// Rows tagged with a supported zone, ready for the engine
    pub rows: Vec<RawReportRow>,

    /// Data rows read from the file
    pub rows_read: usize,

    /// Rows dropped by the unsupported-zone filter
    pub rows_dropped: usize,
}

/// Read a raw-row CSV extract into engine input rows.
///
/// The operation date is derived from the report date inside
/// [`RawReportRow::new`]; rows whose zone tag does not parse are dropped
/// and counted, with a warning per row.
pub fn read_raw_rows(path: &Path, report_date: NaiveDate) -> Result<IngestResult> {
    let file_label = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(&file_label, "Failed to open raw-row extract", Some(e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_label, "Failed to read header row", Some(e)))?
        .clone();
    let columns = resolve_columns(&headers, &file_label)?;
    debug!("Resolved input columns: {:?}", columns);

    let mut result = IngestResult {
        rows: Vec::new(),
        rows_read: 0,
        rows_dropped: 0,
    };

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_parsing(
                &file_label,
                format!("Failed to read data row {}", index + 1),
                Some(e),
            )
        })?;
        result.rows_read += 1;

        let field = |column: usize| record.get(column).unwrap_or("").trim().to_string();

        let zone_raw = field(columns.zone);
        let zone = match zone_raw.parse::<ZoneTag>() {
            Ok(zone) => zone,
            Err(_) => {
                warn!(
                    "Dropping row {}: unsupported zone tag '{}'",
                    index + 1,
                    zone_raw
                );
                result.rows_dropped += 1;
                continue;
            }
        };

        result.rows.push(RawReportRow::new(
            zone,
            field(columns.well_name),
            field(columns.rig_name),
            field(columns.well_type),
            field(columns.summary),
            report_date,
        ));
    }

    debug!(
        "Read {} rows from '{}' ({} dropped by zone filter)",
        result.rows_read, file_label, result.rows_dropped
    );
    Ok(result)
}

/// Resolve the report date from an explicit override or the filename token
pub fn resolve_report_date(path: &Path, explicit: Option<NaiveDate>) -> Result<NaiveDate> {
    if let Some(date) = explicit {
        return Ok(date);
    }
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            Error::date_unresolved(format!(
                "Cannot take a report date from '{}'; provide --report-date",
                path.display()
            ))
        })?;
    report_date_from_filename(&filename)
}

/// Extract the report date from a filename token `tanggal DD Mon YYYY`
pub fn report_date_from_filename(filename: &str) -> Result<NaiveDate> {
    let pattern = Regex::new(FILENAME_DATE_PATTERN)
        .map_err(|e| Error::configuration(format!("Invalid filename date pattern: {}", e)))?;

    let captures = pattern.captures(filename).ok_or_else(|| {
        Error::date_unresolved(format!(
            "Filename '{}' carries no 'tanggal DD Mon YYYY' token; provide --report-date",
            filename
        ))
    })?;

    let token = format!("{} {} {}", &captures[1], &captures[2], &captures[3]);
    NaiveDate::parse_from_str(&token, FILENAME_DATE_FORMAT)
        .map_err(|e| Error::date_parsing(format!("Invalid filename date token '{}'", token), e))
}

fn resolve_columns(headers: &csv::StringRecord, file_label: &str) -> Result<ResolvedColumns> {
    let find = |aliases: &[&str]| {
        headers
            .iter()
            .position(|header| aliases.iter().any(|alias| header.trim() == *alias))
    };
    let require = |aliases: &[&str]| {
        find(aliases).ok_or_else(|| Error::missing_column(aliases[0], file_label))
    };

    Ok(ResolvedColumns {
        zone: require(source_columns::ZONE)?,
        well_name: require(source_columns::WELL_NAME)?,
        rig_name: require(source_columns::RIG_NAME)?,
        well_type: require(source_columns::WELL_TYPE)?,
        summary: require(source_columns::SUMMARY)?,
    })
}
