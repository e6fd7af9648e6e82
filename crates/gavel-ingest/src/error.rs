//! Error types for GAVEL ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a tabular export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV layer rejected the file (ragged rows, invalid UTF-8, ...).
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Structurally invalid source.
    #[error("invalid format in {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    // === Column Errors ===
    /// Required exact-name column absent.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Zero or several headers contain the requested fragment.
    #[error(
        "expected exactly one column containing '{substring}', found {count}: {matches:?}",
        count = .matches.len()
    )]
    ColumnResolution {
        substring: String,
        matches: Vec<String>,
    },

    // === Field Errors ===
    /// A cell could not be coerced to its declared type.
    #[error("invalid {field} value '{value}' on data row {row} of {path}")]
    FieldParse {
        path: PathBuf,
        /// 1-based index of the data row (the header row is not counted).
        row: usize,
        field: String,
        value: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
