//! 单元格标签与零基 (row, col) 坐标之间的双向转换.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::grid::structure::{CellIndex, CellLabel, MazeError};

/// Shape of a canonical cell label: one uppercase row letter followed by a
/// 1-based column number without leading zeros. The leading digit must be
/// non-zero, otherwise `label -> index -> label` would not round-trip
/// (`A01` and `A0` have no preimage).
static CELL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][1-9][0-9]*$").expect("cell pattern is valid"));

const ROW_LETTERS: u32 = 26;

/// Whether `label` matches the letter+digits shape, without converting it.
pub fn matches_shape(label: &str) -> bool {
    CELL_PATTERN.is_match(label)
}

/// Converts a label to its zero-based grid position.
///
/// Fails with [`MazeError::MalformedCell`] when the label does not match
/// the required shape. Bounds against a concrete grid are the validator's
/// concern, not the codec's.
pub fn label_to_index(label: &CellLabel) -> Result<CellIndex, MazeError> {
    let text = label.as_str();
    if !matches_shape(text) {
        return Err(MazeError::MalformedCell);
    }

    let mut chars = text.chars();
    let letter = chars.next().expect("shape guarantees one letter");
    let row = letter as u32 - 'A' as u32;
    // Column numbers beyond u32 cannot lie inside any representable grid.
    let number: u32 = chars
        .as_str()
        .parse()
        .map_err(|_| MazeError::OutOfBounds(label.clone()))?;

    Ok(CellIndex::new(row, number - 1))
}

/// Converts a zero-based grid position back to its label.
///
/// Inverse of [`label_to_index`]; rows at or beyond the 26-letter alphabet
/// fail with [`MazeError::UnaddressableRows`] rather than wrapping into
/// unrelated characters.
pub fn index_to_label(cell: CellIndex) -> Result<CellLabel, MazeError> {
    if cell.row >= ROW_LETTERS {
        return Err(MazeError::UnaddressableRows(cell.row + 1));
    }
    let letter = char::from(b'A' + cell.row as u8);
    Ok(CellLabel::new(format!("{}{}", letter, cell.col + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_convert_to_zero_based_indices() {
        assert_eq!(
            label_to_index(&CellLabel::from("A1")).unwrap(),
            CellIndex::new(0, 0)
        );
        assert_eq!(
            label_to_index(&CellLabel::from("H12")).unwrap(),
            CellIndex::new(7, 11)
        );
        assert_eq!(
            label_to_index(&CellLabel::from("Z999")).unwrap(),
            CellIndex::new(25, 998)
        );
    }

    #[test]
    fn malformed_labels_are_rejected() {
        for label in ["", "1A", "a1", "A", "A1b", "Ms1", "A 1", "AA1", "A0", "A01"] {
            assert_eq!(
                label_to_index(&CellLabel::from(label)),
                Err(MazeError::MalformedCell),
                "label {label:?} should be malformed"
            );
        }
    }

    #[test]
    fn valid_labels_round_trip_exactly() {
        for label in ["A1", "B2", "H4", "H12", "Z100", "J10"] {
            let index = label_to_index(&CellLabel::from(label)).unwrap();
            assert_eq!(index_to_label(index).unwrap().as_str(), label);
        }
    }

    #[test]
    fn indices_round_trip_exactly() {
        for (row, col) in [(0, 0), (7, 3), (25, 0), (3, 998)] {
            let index = CellIndex::new(row, col);
            let label = index_to_label(index).unwrap();
            assert_eq!(label_to_index(&label).unwrap(), index);
        }
    }

    #[test]
    fn rows_beyond_the_alphabet_do_not_wrap() {
        assert_eq!(
            index_to_label(CellIndex::new(26, 0)),
            Err(MazeError::UnaddressableRows(27))
        );
    }
}
