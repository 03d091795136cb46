// ==========================================
// Opsboard - Raw Grid Types
// ==========================================
// Responsibility: the decoded shape of an uploaded file, prior to any
// header interpretation. One grid per upload; immutable once decoded.
// ==========================================

use serde::{Deserialize, Serialize};

/// A single decoded spreadsheet/CSV cell.
///
/// CSV fields always decode to `Text` (or `Empty` for the empty
/// string); spreadsheet cells keep their native numeric type so that
/// values typed directly into a sheet survive coercion unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// Decoded uploaded file: rows of cells, row 0 = first sheet/file row.
pub type RawGrid = Vec<Vec<Cell>>;

impl Cell {
    /// Render the cell the way a spreadsheet UI would print it.
    ///
    /// Integral numbers drop the trailing `.0` so that a numeric part
    /// code cell like `100` round-trips as `"100"`, not `"100.0"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_integral_number() {
        assert_eq!(Cell::Number(120.0).to_text(), "120");
        assert_eq!(Cell::Number(-3.0).to_text(), "-3");
    }

    #[test]
    fn test_to_text_fractional_number() {
        assert_eq!(Cell::Number(10.5).to_text(), "10.5");
    }

    #[test]
    fn test_to_text_empty_and_text() {
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::Text("Soap".to_string()).to_text(), "Soap");
    }

    #[test]
    fn test_is_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::Text(String::new()).is_empty());
        assert!(!Cell::Text(" ".to_string()).is_empty());
        assert!(!Cell::Number(0.0).is_empty());
    }
}
