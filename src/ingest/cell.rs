// ==========================================
// Opsboard - Cell Normalizer
// ==========================================
// Responsibility: turn a raw spreadsheet cell into a canonical
// comparable string (header matching) or a finite number (quantity
// and amount fields). Pure functions, no dependencies.
//
// Two header normalizers exist on purpose and must stay separate:
// inventory headers are matched by exact phrase ("on hand"), sales
// headers by fuzzy substring after stripping all punctuation and
// spaces ("qty" must match "Qty." and "Quantity Shipped").
// ==========================================

use crate::domain::Cell;

/// Default for every missing or unparsable numeric field.
///
/// Silent zero-defaulting is a deliberate compatibility policy of the
/// upload pipelines; keep it behind this constant so tests can assert
/// on it directly.
pub const NUMERIC_DEFAULT: f64 = 0.0;

/// Canonicalize a header cell for exact-phrase matching.
///
/// Line breaks become single spaces, double quotes are stripped,
/// whitespace runs collapse to one space, the result is trimmed and
/// lowercased. Internal spaces survive: `"On\nHand"` -> `"on hand"`.
pub fn normalize_header_phrase(cell: &Cell) -> String {
    let text = cell
        .to_text()
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('"', "");
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Canonicalize a header cell for fuzzy-substring matching.
///
/// Lowercases and then removes every character that is not an ASCII
/// lowercase letter or digit: `"Qty. Shipped"` -> `"qtyshipped"`.
pub fn normalize_header_token(cell: &Cell) -> String {
    cell.to_text()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Coerce any cell to a finite number, defaulting to [`NUMERIC_DEFAULT`].
///
/// Already-numeric cells pass through unchanged (no re-parse, so a
/// negative number typed directly into a sheet keeps its exact value).
/// Text cells have non-breaking spaces replaced by ordinary spaces and
/// every character that is not a digit, dot or minus stripped before
/// parsing; this intentionally discards currency symbols, thousands
/// separators and stray annotations. Non-finite results become the
/// default.
pub fn coerce_number(cell: &Cell) -> f64 {
    match cell {
        Cell::Empty => NUMERIC_DEFAULT,
        Cell::Number(n) => *n,
        Cell::Text(s) => {
            let cleaned: String = s
                .replace('\u{00A0}', " ")
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            match cleaned.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => NUMERIC_DEFAULT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_normalize_phrase_collapses_breaks_and_quotes() {
        assert_eq!(normalize_header_phrase(&text("On\r\nHand")), "on hand");
        assert_eq!(normalize_header_phrase(&text("\"Drop  Ship\"")), "drop ship");
        assert_eq!(normalize_header_phrase(&text("  Not \n Available ")), "not available");
    }

    #[test]
    fn test_normalize_phrase_idempotent() {
        for raw in ["On\nHand", "\"Part\"", "  UOM  ", "already lower"] {
            let once = normalize_header_phrase(&text(raw));
            let twice = normalize_header_phrase(&text(&once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_token_strips_punctuation() {
        assert_eq!(normalize_header_token(&text("Qty.")), "qty");
        assert_eq!(normalize_header_token(&text("Quantity Shipped")), "quantityshipped");
        assert_eq!(normalize_header_token(&text("Gross Sales ($)")), "grosssales");
        assert_eq!(normalize_header_token(&Cell::Empty), "");
    }

    #[test]
    fn test_normalize_token_idempotent() {
        for raw in ["Qty.", "Sales $", "Product #", "plain"] {
            let once = normalize_header_token(&text(raw));
            let twice = normalize_header_token(&text(&once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_coerce_number_is_total() {
        assert_eq!(coerce_number(&Cell::Empty), NUMERIC_DEFAULT);
        assert_eq!(coerce_number(&text("")), NUMERIC_DEFAULT);
        assert_eq!(coerce_number(&text("abc")), NUMERIC_DEFAULT);
        assert_eq!(coerce_number(&text("$1,234.50")), 1234.50);
        assert_eq!(coerce_number(&text("-12")), -12.0);
        assert_eq!(coerce_number(&text("\u{00A0}1\u{00A0}234\u{00A0}")), 1234.0);
        assert_eq!(coerce_number(&text("1.2.3")), NUMERIC_DEFAULT);
        assert_eq!(coerce_number(&text("  42 pcs ")), 42.0);
    }

    #[test]
    fn test_coerce_number_passes_numeric_cells_through() {
        assert_eq!(coerce_number(&Cell::Number(-2.5)), -2.5);
        assert_eq!(coerce_number(&Cell::Number(0.0)), 0.0);
        // A numeric cell is exact: no stripping, no re-parse
        assert_eq!(coerce_number(&Cell::Number(1e-7)), 1e-7);
    }
}
