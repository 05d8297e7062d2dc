//! Command-line argument definitions for the DDR processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the daily drilling report processor
///
/// Normalizes Region 1 daily drilling report extracts into the canonical
/// 19-field record schema and exports the merged table for downstream
/// reporting tools.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ddr-processor",
    version,
    about = "Normalize Region 1 daily drilling reports into the canonical 19-field schema",
    long_about = "Normalizes daily drilling report rows from the three reporting zones \
                  (Zone 1, Zone 2&3, Zone 4) into one canonical 19-field table. Each zone's \
                  well identifiers, rig names, and narrative summaries are split with that \
                  zone's grammar, assembled into uniform records, and merged in fixed zone \
                  order for export."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the DDR processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Normalize a raw-row extract into the canonical table (main command)
    Process(ProcessArgs),
    /// Report the configured zone grammars and lookup tables
    Zones(ZonesArgs),
}

/// Arguments for the process command (main normalization)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path to a raw-row CSV extract
    ///
    /// One data row per report row, with either the canonical headers
    /// (Zone, Well Name, Rig Name, Well Type, Summary Report) or the
    /// source-sheet headers (Zona, Nama Sumur, RIG, Jenis Kegiatan,
    /// Kegiatan).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to a raw-row CSV extract"
    )]
    pub input_path: PathBuf,

    /// Output path for the exported table (tab-separated, no header)
    ///
    /// Defaults to <report-date>.tsv in the working directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the exported table"
    )]
    pub output_path: Option<PathBuf>,

    /// Report date stated by the source report (YYYY-MM-DD)
    ///
    /// If not specified, the date is taken from a 'tanggal DD Mon YYYY'
    /// token in the input filename. The operation date is always the report
    /// date minus one day.
    #[arg(
        long = "report-date",
        value_name = "DATE",
        help = "Report date (YYYY-MM-DD); default from the filename token"
    )]
    pub report_date: Option<NaiveDate>,

    /// Keep only records whose Report Date equals this date (YYYY-MM-DD)
    #[arg(
        long = "filter-date",
        value_name = "DATE",
        help = "Export only records with this Report Date"
    )]
    pub filter_date: Option<NaiveDate>,

    /// Process the three zone partitions on concurrent tasks
    #[arg(long = "concurrent", help = "Process zone partitions concurrently")]
    pub concurrent: bool,

    /// Suppress the processing summary
    #[arg(short = 'q', long = "quiet", help = "Suppress the processing summary")]
    pub quiet: bool,
}

/// Arguments for the zones command (grammar report)
#[derive(Debug, Clone, Parser)]
pub struct ZonesArgs {
    /// Include the per-keyword marker details for each zone
    #[arg(long = "detailed", help = "Include per-keyword marker details")]
    pub detailed: bool,
}
