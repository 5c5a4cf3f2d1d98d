//! Error types for sample table ingestion.

use std::path::PathBuf;

use rgbrange_model::Channel;
use thiserror::Error;

/// Errors that can occur while loading and resolving a sample table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}: convert the file to UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no records at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Layout Errors ===
    /// Neither the header nor the column count identified the R, G, B columns.
    #[error(
        "could not identify R, G, B columns (detected {width} columns); \
         expected an R,G,B header, 3 columns (R,G,B) or 4 columns (Index,R,G,B)"
    )]
    ColumnInference { width: usize },

    /// A headerless row does not match the width of the first row.
    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A channel cell is missing or is not a finite number.
    #[error("malformed {column} value '{value}' on line {line}: expected a finite number")]
    MalformedData {
        line: u64,
        column: Channel,
        value: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
