//! Recognition of numeric cells.

use regex::Regex;

/// Pattern for decimal floating point numbers.
pub static FLOAT_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\d+\.?\d*|\d*\.?\d+)(?:[eE][-+]?\d+)?$").expect("Invalid float pattern")
});

/// Parse a cell as a finite number. Surrounding whitespace is ignored; `NaN`,
/// `inf`, empty cells and literals that overflow `f64` (such as `1e999`) are
/// rejected.
#[inline]
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if !FLOAT_PATTERN.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns true if the cell parses as a number.
#[inline]
pub fn is_numeric(cell: &str) -> bool {
    parse_number(cell).is_some()
}
