//! End-to-end integration tests for the normalization pipeline
//!
//! These tests drive the full path a real extract takes: raw-row CSV on
//! disk, ingestion with the zone filter, per-zone normalization, DataFrame
//! conversion, and tab-separated export.

use chrono::NaiveDate;
use std::io::Write;

use ddr_processor::app::services::export;
use ddr_processor::cli::input;
use ddr_processor::NormalizationEngine;

/// A realistic extract: all three zones out of merge order, one unsupported
/// zone row, source-sheet headers with the trailing space in "Kegiatan "
const RAW_EXTRACT: &str = "\
Zona,Nama Sumur,RIG,Jenis Kegiatan,Kegiatan \n\
Zona 4,\"KSO-P18 (KSO-P18A)\",Rig Airlangga #55,Pengembangan,\"Drilled to 1200m. Status Pagi 05:30: circulating. Plan: run casing.\"\n\
Zona 2 & 3,\"Benggala Utara\n(BGU-01)\n(BGU-A1)\",RIG-1,Eksplorasi,\"Laporan: -perforasi selesai\nStatus Pagi 06:00: tes produksi\nRencana: lanjut monitoring\"\n\
Zona 5,IGNORED-1,Rig Q,Eksplorasi,not a supported zone\n\
Zona 1,RNT-DZ51/P-475,Rig PDSI #28.2,Pengembangan,\"Did X. Plan: Do Y.\"\n";

fn write_extract(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("Laporan Harian Pemboran Regional 1 tanggal 12 Feb 2026.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", RAW_EXTRACT).unwrap();
    path
}

#[test]
fn test_extract_to_canonical_table() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_extract(dir.path());

    // Report date comes from the filename token
    let report_date = input::resolve_report_date(&input_path, None).unwrap();
    assert_eq!(report_date, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());

    let ingest = input::read_raw_rows(&input_path, report_date).unwrap();
    assert_eq!(ingest.rows_read, 4);
    assert_eq!(ingest.rows_dropped, 1);

    let engine = NormalizationEngine::new().unwrap();
    let table = engine.normalize(&ingest.rows).unwrap();

    // One record per supported row, zone-grouped in fixed order
    assert_eq!(table.len(), 3);
    let zones: Vec<_> = table.records.iter().map(|r| r.zone.as_str()).collect();
    assert_eq!(zones, vec!["Zone 1", "Zone 2&3", "Zone 4"]);

    let zone_1 = &table.records[0];
    assert_eq!(zone_1.well_name, "RNT-DZ51");
    assert_eq!(zone_1.well_name_2, "P-475");
    assert_eq!(zone_1.rig_name, "PDSI #28.2");
    assert_eq!(zone_1.summary_report, "Did X.");
    assert_eq!(zone_1.next_plan, "Do Y.");
    assert_eq!(zone_1.aph, "PEP");

    let zone_23 = &table.records[1];
    assert_eq!(zone_23.well_name, "BGU-01");
    assert_eq!(zone_23.well_name_2, "BGU-A1");
    assert_eq!(zone_23.summary_report, "perforasi selesai");
    assert_eq!(zone_23.current_status, "tes produksi");
    assert_eq!(zone_23.next_plan, "lanjut monitoring");
    assert_eq!(zone_23.well_type, "Exploration");
    assert_eq!(zone_23.aph, "PHR");

    let zone_4 = &table.records[2];
    assert_eq!(zone_4.well_name, "KSO-P18");
    assert_eq!(zone_4.well_name_2, "KSO-P18A");
    assert_eq!(zone_4.rig_name, "Airlangga-55");
    assert_eq!(zone_4.summary_report, "Drilled to 1200m.");
    assert_eq!(zone_4.current_status, "circulating.");
    assert_eq!(zone_4.next_plan, "run casing.");

    // Every record carries the full schema constants and derived dates
    for record in &table.records {
        assert_eq!(record.flag, "INC");
        assert_eq!(record.region, "Region 1");
        assert_eq!(record.location, "Onshore");
        assert_eq!(record.report_date, report_date);
        assert_eq!(
            record.operation_date,
            NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
        );
    }
}

#[test]
fn test_table_exports_as_headerless_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_extract(dir.path());

    let report_date = input::resolve_report_date(&input_path, None).unwrap();
    let ingest = input::read_raw_rows(&input_path, report_date).unwrap();
    let engine = NormalizationEngine::new().unwrap();
    let table = engine.normalize(&ingest.rows).unwrap();

    let mut frame = export::to_dataframe(&table.records).unwrap();
    let output_path = dir.path().join(export::default_export_filename(report_date));
    export::write_tsv(&mut frame, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // No header row: the first line is already data
    assert!(lines[0].starts_with("INC\t"));
    // Every data line carries the report and operation dates
    assert!(content.contains("2026-02-12"));
    assert!(content.contains("2026-02-11"));
    // The unsupported zone never reaches the export
    assert!(!content.contains("IGNORED-1"));
}

#[tokio::test]
async fn test_concurrent_pipeline_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_extract(dir.path());

    let report_date = input::resolve_report_date(&input_path, None).unwrap();
    let ingest = input::read_raw_rows(&input_path, report_date).unwrap();
    let engine = NormalizationEngine::new().unwrap();

    let sequential = engine.normalize(&ingest.rows).unwrap();
    let concurrent = engine.normalize_concurrent(&ingest.rows).await.unwrap();
    assert_eq!(sequential.records, concurrent.records);
}
