use thiserror::Error;

/// Errors raised while turning a range selection into a [`crate::Range`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// A custom bound was not a parseable integer.
    #[error("invalid {bound} bound '{value}': expected an integer")]
    InvalidRangeInput { bound: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, RangeError>;
