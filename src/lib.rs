//! DDR Processor Library
//!
//! A Rust library for normalizing Region 1 daily drilling reports into a
//! canonical 19-field record schema usable by downstream reporting tools.
//!
//! This library provides tools for:
//! - Splitting compound report cells (well identifiers, narrative summaries,
//!   rig names) into discrete canonical fields via per-zone grammars
//! - Assembling canonical records with fixed constants and derived fields
//! - Merging zone batches into one uniform table in fixed zone order
//! - Converting the canonical table to a polars DataFrame for filtering
//!   and tab-separated export
//! - Comprehensive error handling with row-local fallback semantics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod engine;
        pub mod export;
        pub mod extractors;
        pub mod grammar;
        pub mod zone_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{CanonicalRecord, Extraction, RawReportRow, ZoneTag};
pub use app::services::engine::NormalizationEngine;
pub use config::EngineConfig;

/// Result type alias for the DDR processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for report normalization operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error at the ingestion boundary
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required column missing from a raw-row extract
    #[error("Required column '{column}' not found in file '{file}'")]
    MissingColumn { column: String, file: String },

    /// Zone tag outside the supported set reached a strict boundary
    #[error("Unrecognized zone tag: '{tag}'")]
    UnrecognizedZone { tag: String },

    /// An assembled record violated the canonical schema invariant
    #[error("Canonical schema violation: {message}")]
    SchemaViolation { message: String },

    /// Configuration error (invalid defaults, tables, or grammar patterns)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date parsing or resolution error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Table conversion or export error
    #[error("Table export error: {message}")]
    TableExport {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, file: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            file: file.into(),
        }
    }

    /// Create an unrecognized zone error
    pub fn unrecognized_zone(tag: impl Into<String>) -> Self {
        Self::UnrecognizedZone { tag: tag.into() }
    }

    /// Create a schema violation error
    pub fn schema_violation(message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date parsing error with a chrono source
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a date resolution error without an underlying parse failure
    pub fn date_unresolved(message: impl Into<String>) -> Self {
        Self::DateParsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a table export error
    pub fn table_export(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: "Table operation failed".to_string(),
            source: error,
        }
    }
}
