//! Channel value ranges and the bit-depth presets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

/// Inclusive bounds a channel value may occupy.
///
/// No ordering is enforced between `min` and `max`; `min == max` is a valid
/// (degenerate) range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

/// Integer sample bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    Eight,
    /// 10-bit unsigned integer.
    Ten,
    /// 12-bit unsigned integer.
    Twelve,
}

/// Signal range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// Entire numeric span of the bit depth.
    Full,
    /// Video legal (limited) range with head- and footroom.
    Legal,
}

/// One row of the preset catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetEntry {
    pub depth: BitDepth,
    pub kind: RangeKind,
    pub range: Range,
}

/// A range selection as made by the user, before validation of custom bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeChoice {
    Preset { depth: BitDepth, kind: RangeKind },
    /// Raw bound text, parsed by [`RangeChoice::resolve`].
    Custom { min: String, max: String },
}

impl Range {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Fixed bounds for a bit depth and range convention.
    pub const fn preset(depth: BitDepth, kind: RangeKind) -> Self {
        match (depth, kind) {
            (BitDepth::Eight, RangeKind::Full) => Self::new(0, 255),
            (BitDepth::Eight, RangeKind::Legal) => Self::new(16, 235),
            (BitDepth::Ten, RangeKind::Full) => Self::new(0, 1023),
            (BitDepth::Ten, RangeKind::Legal) => Self::new(64, 940),
            (BitDepth::Twelve, RangeKind::Full) => Self::new(0, 4095),
            (BitDepth::Twelve, RangeKind::Legal) => Self::new(256, 3760),
        }
    }

    /// All presets, ordered by bit depth then full before legal.
    pub fn presets() -> Vec<PresetEntry> {
        let mut entries = Vec::with_capacity(BitDepth::ALL.len() * 2);
        for depth in BitDepth::ALL {
            for kind in [RangeKind::Full, RangeKind::Legal] {
                entries.push(PresetEntry {
                    depth,
                    kind,
                    range: Self::preset(depth, kind),
                });
            }
        }
        entries
    }

    /// Signed distance from `min` to `max`.
    ///
    /// Subtracts in `i128` before converting, so distinct bounds never yield 0
    /// even where both round to the same `f64`.
    pub fn span(&self) -> f64 {
        (i128::from(self.max) - i128::from(self.min)) as f64
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Lowest and highest bound regardless of orientation.
    pub fn ordered(&self) -> (i64, i64) {
        (self.min.min(self.max), self.min.max(self.max))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl BitDepth {
    pub const ALL: [BitDepth; 3] = [BitDepth::Eight, BitDepth::Ten, BitDepth::Twelve];

    pub const fn bits(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Ten => 10,
            Self::Twelve => 12,
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(Self::Eight),
            10 => Some(Self::Ten),
            12 => Some(Self::Twelve),
            _ => None,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = String;

    fn try_from(bits: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("unsupported bit depth: {bits}"))
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Legal => write!(f, "legal"),
        }
    }
}

impl RangeChoice {
    pub fn preset(depth: BitDepth, kind: RangeKind) -> Self {
        Self::Preset { depth, kind }
    }

    pub fn custom(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self::Custom {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Resolve the selection to concrete bounds.
    ///
    /// Presets always succeed. Custom bounds are trimmed and parsed as integers.
    pub fn resolve(&self) -> Result<Range> {
        match self {
            Self::Preset { depth, kind } => Ok(Range::preset(*depth, *kind)),
            Self::Custom { min, max } => {
                let min = parse_bound("minimum", min)?;
                let max = parse_bound("maximum", max)?;
                Ok(Range::new(min, max))
            }
        }
    }
}

fn parse_bound(bound: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RangeError::InvalidRangeInput {
            bound,
            value: value.to_string(),
        })
}
