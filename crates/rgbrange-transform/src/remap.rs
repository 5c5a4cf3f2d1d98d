use rgbrange_model::{ConvertedTable, Range, Row, SampleTable, Table};
use tracing::debug;

/// Precomputed affine conversion between a source and a target range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapping {
    source: Range,
    target: Range,
    scale: f64,
}

impl RangeMapping {
    pub fn new(source: Range, target: Range) -> Self {
        let scale = if source.is_degenerate() {
            0.0
        } else {
            target.span() / source.span()
        };
        Self {
            source,
            target,
            scale,
        }
    }

    pub fn source(&self) -> Range {
        self.source
    }

    pub fn target(&self) -> Range {
        self.target
    }

    /// Multiplier applied to the shifted value; 0 for a degenerate source range.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// Value before rounding and clipping.
    pub fn scaled(&self, value: f64) -> f64 {
        (value - self.source.min as f64) * self.scale + self.target.min as f64
    }

    /// Converts one finite channel value.
    pub fn apply(&self, value: f64) -> i64 {
        let rounded = self.scaled(value).round_ties_even();
        // lower bound first, upper bound last
        let clipped = rounded
            .max(self.target.min as f64)
            .min(self.target.max as f64);
        clipped as i64
    }

    fn apply_rgb(&self, rgb: [f64; 3]) -> [i64; 3] {
        rgb.map(|value| self.apply(value))
    }
}

/// Converts every channel of every row, keeping row order and identifiers.
pub fn remap_table(table: SampleTable, mapping: &RangeMapping) -> ConvertedTable {
    debug!(
        source = %mapping.source,
        target = %mapping.target,
        scale = mapping.scale,
        rows = table.len(),
        "remapping sample table"
    );
    let rows = table
        .rows
        .into_iter()
        .map(|row| Row {
            rgb: mapping.apply_rgb(row.rgb),
            index: row.index,
        })
        .collect();
    Table::with_rows(table.layout, rows)
}
