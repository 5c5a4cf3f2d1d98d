//! RGB range remapping.
//!
//! Converts channel values from one integer range convention to another:
//!
//! ```text
//! out = clip(round((value - src.min) * scale + tgt.min), tgt.min, tgt.max)
//! scale = (tgt.max - tgt.min) / (src.max - src.min), or 0 when src.min == src.max
//! ```
//!
//! Rounding is half-to-even. Clipping applies the lower bound first, then the
//! upper bound, so inverted target bounds collapse every value to `tgt.max`
//! instead of failing.
//!
//! # Example
//!
//! ```
//! use rgbrange_model::{BitDepth, Range, RangeKind};
//! use rgbrange_transform::RangeMapping;
//!
//! let mapping = RangeMapping::new(
//!     Range::preset(BitDepth::Eight, RangeKind::Legal),
//!     Range::preset(BitDepth::Eight, RangeKind::Full),
//! );
//! assert_eq!(mapping.apply(16.0), 0);
//! assert_eq!(mapping.apply(235.0), 255);
//! ```

mod remap;

pub use remap::{RangeMapping, remap_table};
