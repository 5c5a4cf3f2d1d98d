//! Writing converted sample tables.

mod csv_writer;
mod error;
mod naming;

pub use csv_writer::{write_converted_csv, write_converted_to};
pub use error::{OutputError, Result};
pub use naming::{converted_file_name, output_path_for};
