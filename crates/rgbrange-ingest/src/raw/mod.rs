//! Raw CSV records and header inspection.

mod header;
mod reader;

pub(crate) use header::{find_channel_columns, missing_channels};
pub use reader::{RawRecord, RawTable, read_raw_table, validate_encoding};
