//! RGB sample table ingestion.
//!
//! This crate reads loosely structured CSV files and resolves them into a
//! normalized [`SampleTable`](rgbrange_model::SampleTable).
//!
//! # Accepted shapes
//!
//! - A header row naming `R`, `G` and `B` (any position, other columns ignored)
//! - No header, three columns: `R, G, B`
//! - No header, four columns: `Index, R, G, B`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rgbrange_ingest::load_sample_table;
//!
//! let table = load_sample_table(Path::new("patches.csv"))?;
//! println!("{} rows, layout {}", table.len(), table.layout);
//! ```

mod error;
mod numeric;
mod raw;
mod resolver;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use raw::{RawRecord, RawTable, read_raw_table, validate_encoding};

// === Layout Resolution ===
pub use resolver::{load_sample_table, resolve_table};

// === Value Parsing ===
pub use numeric::parse_channel_value;
