//! CSV serialization of converted tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use rgbrange_model::ConvertedTable;
use tracing::info;

use crate::error::{OutputError, Result};

/// Writes a header row from the table layout followed by every row.
///
/// The `Index` column, when present, is written exactly as it was read.
pub fn write_converted_to<W: Write>(writer: W, table: &ConvertedTable) -> csv::Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(table.column_names())?;

    let mut record: Vec<String> = Vec::with_capacity(table.column_names().len());
    for row in &table.rows {
        record.clear();
        if let Some(index) = &row.index {
            record.push(index.clone());
        }
        record.extend(row.rgb.iter().map(i64::to_string));
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a converted table to `path`, replacing any existing file.
pub fn write_converted_csv(path: &Path, table: &ConvertedTable) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_converted_to(file, table).map_err(|e| OutputError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), rows = table.len(), "wrote converted table");
    Ok(())
}
