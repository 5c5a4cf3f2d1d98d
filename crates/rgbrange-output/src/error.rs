use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode CSV for {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;
