//! CSV file reading into untyped records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// One line of the input, fields exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source file.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Every record of a CSV file, with no row treated as a header yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Builds a table from in-memory rows, numbering lines from 1.
    pub fn from_rows<R, F>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let records = rows
            .into_iter()
            .zip(1u64..)
            .map(|(fields, line)| RawRecord {
                line,
                fields: fields.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

fn to_raw_record(record: &StringRecord, fallback_line: u64) -> RawRecord {
    let line = record.position().map_or(fallback_line, csv::Position::line);
    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
    // UTF-8 BOM is acceptable; drop it from the first cell of the file
    if fallback_line == 1
        && let Some(first) = fields.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }
    RawRecord { line, fields }
}

/// Reads every record of a CSV file without interpreting a header.
///
/// Rows may differ in width; layout resolution decides whether that is an error.
/// Blank lines are skipped.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (record, ordinal) in reader.records().zip(1u64..) {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(to_raw_record(&record, ordinal));
    }

    if records.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(RawTable { records })
}
