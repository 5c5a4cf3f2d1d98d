//! CLI library components for rgbrange.

pub mod logging;
pub mod pipeline;
