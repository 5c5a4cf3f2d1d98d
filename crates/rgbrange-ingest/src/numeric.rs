//! Channel value parsing.

/// Parse a channel cell to a finite `f64`.
///
/// Accepts integers, decimals and scientific notation, with surrounding
/// whitespace (including non-breaking spaces). Returns `None` for empty cells,
/// unparseable text and non-finite values such as `nan` or `inf`.
pub fn parse_channel_value(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{a0}');

    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}
