//! Normalized sample tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color channel column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the columns of a table were identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// Header row naming `R`, `G` and `B`; other columns were dropped.
    Header,
    /// No header, three positional columns `R, G, B`.
    Rgb,
    /// No header, four positional columns `Index, R, G, B`.
    IndexRgb,
}

impl TableLayout {
    /// Name of the passthrough identifier column.
    pub const INDEX_COLUMN: &'static str = "Index";

    pub fn has_index(self) -> bool {
        matches!(self, Self::IndexRgb)
    }

    /// Column names in output order.
    pub fn column_names(self) -> &'static [&'static str] {
        match self {
            Self::Header | Self::Rgb => &["R", "G", "B"],
            Self::IndexRgb => &["Index", "R", "G", "B"],
        }
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header [R, G, B]"),
            Self::Rgb => write!(f, "positional [R, G, B]"),
            Self::IndexRgb => write!(f, "positional [Index, R, G, B]"),
        }
    }
}

/// One sample: an optional identifier and the three channel values in `R, G, B` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    /// Identifier text exactly as read; only present for [`TableLayout::IndexRgb`].
    pub index: Option<String>,
    pub rgb: [T; 3],
}

impl<T> Row<T> {
    pub fn new(index: Option<String>, rgb: [T; 3]) -> Self {
        Self { index, rgb }
    }
}

/// Ordered rows sharing a single column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    pub layout: TableLayout,
    pub rows: Vec<Row<T>>,
}

/// Resolved input samples, possibly fractional.
pub type SampleTable = Table<f64>;

/// Converted samples, always integral.
pub type ConvertedTable = Table<i64>;

impl<T> Table<T> {
    pub fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(layout: TableLayout, rows: Vec<Row<T>>) -> Self {
        Self { layout, rows }
    }

    pub fn push_row(&mut self, row: Row<T>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> &'static [&'static str] {
        self.layout.column_names()
    }
}
