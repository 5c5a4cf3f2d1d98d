//! Column layout resolution.
//!
//! The first record is tried as a header naming `R`, `G` and `B`. When it does
//! not name all three, every record (the first included) is read as data and
//! the column count decides the layout: 3 columns are `R, G, B`, 4 columns are
//! `Index, R, G, B`. Anything else cannot be resolved.

use std::path::Path;

use rgbrange_model::{Channel, Row, SampleTable, TableLayout};
use tracing::{debug, info, info_span, warn};

use crate::error::{IngestError, Result};
use crate::numeric::parse_channel_value;
use crate::raw::{
    RawRecord, RawTable, find_channel_columns, missing_channels, read_raw_table, validate_encoding,
};

/// Reads a CSV file and resolves it into a sample table.
pub fn load_sample_table(path: &Path) -> Result<SampleTable> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();

    validate_encoding(path)?;
    let raw = read_raw_table(path)?;
    debug!(records = raw.len(), "read raw records");
    resolve_table(&raw)
}

/// Resolves raw records into a normalized table.
pub fn resolve_table(raw: &RawTable) -> Result<SampleTable> {
    let Some(first) = raw.records.first() else {
        return Err(IngestError::ColumnInference { width: 0 });
    };

    if let Some(columns) = find_channel_columns(&first.fields) {
        info!(rows = raw.len() - 1, "found R, G, B columns in header");
        return resolve_with_header(&raw.records[1..], columns);
    }

    let missing: Vec<&str> = missing_channels(&first.fields)
        .into_iter()
        .map(Channel::name)
        .collect();
    warn!(
        missing = ?missing,
        "header does not name all of R, G, B; reading first row as data"
    );
    resolve_positional(&raw.records)
}

fn resolve_with_header(records: &[RawRecord], columns: [usize; 3]) -> Result<SampleTable> {
    let mut table = SampleTable::new(TableLayout::Header);
    for record in records {
        let rgb = parse_channels(record, columns)?;
        table.push_row(Row::new(None, rgb));
    }
    Ok(table)
}

fn resolve_positional(records: &[RawRecord]) -> Result<SampleTable> {
    let width = records.first().map_or(0, |record| record.fields.len());
    let (layout, columns) = match width {
        4 => (TableLayout::IndexRgb, [1, 2, 3]),
        3 => (TableLayout::Rgb, [0, 1, 2]),
        _ => return Err(IngestError::ColumnInference { width }),
    };
    info!(columns = width, layout = %layout, "applied positional layout");

    let mut table = SampleTable::new(layout);
    for record in records {
        if record.fields.len() != width {
            return Err(IngestError::RaggedRow {
                line: record.line,
                expected: width,
                found: record.fields.len(),
            });
        }
        let index = layout.has_index().then(|| record.fields[0].clone());
        let rgb = parse_channels(record, columns)?;
        table.push_row(Row::new(index, rgb));
    }
    Ok(table)
}

fn parse_channels(record: &RawRecord, columns: [usize; 3]) -> Result<[f64; 3]> {
    let mut rgb = [0.0; 3];
    let targets = Channel::ALL.into_iter().zip(columns);
    for (slot, (channel, column)) in rgb.iter_mut().zip(targets) {
        let cell = record.fields.get(column).map_or("", String::as_str);
        *slot = parse_channel_value(cell).ok_or_else(|| IngestError::MalformedData {
            line: record.line,
            column: channel,
            value: cell.to_string(),
        })?;
    }
    Ok(rgb)
}
