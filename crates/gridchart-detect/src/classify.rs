//! Presence classification of single cells

use gridchart_core::CellValue;

/// Parse a cell as a number, if it looks like one.
///
/// - `Number` is numeric when it is finite
/// - `String` is numeric when its trimmed text is non-empty and parses as a
///   finite `f64` (`"12"`, `" 3.5 "`, `"1e3"`); `"inf"` and `"NaN"` are text
/// - `Empty` and `Boolean` are never numeric
pub fn numeric_value(cell: &CellValue) -> Option<f64> {
    let n = match cell {
        CellValue::Number(n) => *n,
        CellValue::String(s) => {
            let text = s.as_str().trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        CellValue::Empty | CellValue::Boolean(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Presence bit of a cell: 1 if it carries a usable number, else 0.
pub fn classify(cell: &CellValue) -> u8 {
    u8::from(numeric_value(cell).is_some())
}

/// Numeric-looking cells become [`CellValue::Number`]; anything else is
/// returned as is.
pub fn numeric_or_raw(cell: &CellValue) -> CellValue {
    match numeric_value(cell) {
        Some(n) => CellValue::Number(n),
        None => cell.clone(),
    }
}
