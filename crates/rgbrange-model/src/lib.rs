//! Core types shared by the rgbrange crates.
//!
//! - [`Range`] and the preset catalogue ([`BitDepth`] × [`RangeKind`])
//! - [`RangeChoice`], the already-validated range selection handed in by a front end
//! - [`Table`], the normalized sample table produced by ingest and consumed by the remapper

pub mod error;
pub mod range;
pub mod table;

pub use error::{RangeError, Result};
pub use range::{BitDepth, PresetEntry, Range, RangeChoice, RangeKind};
pub use table::{Channel, ConvertedTable, Row, SampleTable, Table, TableLayout};
