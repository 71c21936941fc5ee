//! 迷宫静态结构元素：栅格尺寸、单元格标签、坐标与错误分类.
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::ids::CellId;

/// Failures a maze definition can exhibit.
///
/// Every variant reflects a defect in the supplied definition, detected
/// synchronously during validation or exploration; none is transient or
/// retryable. "No path to the last row" is deliberately not listed here:
/// an unsolvable maze is a legitimate outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid-size descriptor does not have the `<rows>x<cols>` shape,
    /// or names a dimension of zero.
    #[error("grid size must be a string of format <rows>x<cols> e.g. 8x8, got {0}")]
    InvalidGridSize(String),
    /// A cell label does not match the letter+digits shape. The message
    /// surfaces the expected pattern, not the offending value; out-of-bounds
    /// errors do the opposite. The asymmetry is load-bearing for callers
    /// matching on messages.
    #[error("cell coordinates must match pattern letter+digits")]
    MalformedCell,
    /// A well-formed cell label lies outside the grid extent.
    #[error("coordinates {0} are outside maze")]
    OutOfBounds(CellLabel),
    /// Two distinct last-row cells are reachable from the entrance.
    #[error("maze has more than one exit: {first} and {second}")]
    MultipleExits { first: CellLabel, second: CellLabel },
    /// Rows beyond `Z` have no single-letter label. Grids taller than 26
    /// rows are rejected outright instead of wrapping into unrelated
    /// characters.
    #[error("grid rows {0} exceed the addressable row labels A..Z")]
    UnaddressableRows(u32),
}

/// Extent of the rectangular grid. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Index of the far boundary row, where exits live.
    pub fn last_row(&self) -> u32 {
        self.rows - 1
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major id of an in-bounds cell.
    pub fn cell_id(&self, cell: CellIndex) -> CellId {
        debug_assert!(self.contains(cell));
        CellId::new(cell.row * self.cols + cell.col)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Human-readable cell address: row letter plus 1-based column number,
/// e.g. `A1` or `H12`. Equality is string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellLabel(String);

impl CellLabel {
    /// Wraps a label string as-is. Shape and bounds are established by the
    /// codec and the validator, not here.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellLabel {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

/// Zero-based (row, column) position of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: u32,
    pub col: u32,
}

impl CellIndex {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A validated maze definition: grid extent, entrance and wall set.
///
/// Constructed through [`Maze::parse`](crate::grid::validate) and never
/// mutated afterwards, so solving borrows it shared and concurrent solves
/// of different mazes need no coordination. Duplicate walls collapse in the
/// set; a wall entry naming the entrance is kept and ignored by the
/// explorer, matching the observed behavior of the original service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: GridSize,
    entrance: CellLabel,
    walls: IndexSet<CellLabel>,
}

impl Maze {
    pub(crate) fn from_validated(
        size: GridSize,
        entrance: CellLabel,
        walls: IndexSet<CellLabel>,
    ) -> Self {
        Self {
            size,
            entrance,
            walls,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn entrance(&self) -> &CellLabel {
        &self.entrance
    }

    pub fn walls(&self) -> &IndexSet<CellLabel> {
        &self.walls
    }

    pub fn is_wall(&self, label: &CellLabel) -> bool {
        self.walls.contains(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_display_round_trips_descriptor_shape() {
        let size = GridSize::new(8, 12);
        assert_eq!(size.to_string(), "8x12");
        assert_eq!(size.cells(), 96);
        assert_eq!(size.last_row(), 7);
    }

    #[test]
    fn cell_ids_are_row_major() {
        let size = GridSize::new(3, 4);
        assert_eq!(size.cell_id(CellIndex::new(0, 0)), CellId::new(0));
        assert_eq!(size.cell_id(CellIndex::new(1, 0)), CellId::new(4));
        assert_eq!(size.cell_id(CellIndex::new(2, 3)), CellId::new(11));
    }

    #[test]
    fn contains_checks_both_extents() {
        let size = GridSize::new(2, 2);
        assert!(size.contains(CellIndex::new(1, 1)));
        assert!(!size.contains(CellIndex::new(2, 0)));
        assert!(!size.contains(CellIndex::new(0, 2)));
    }

    #[test]
    fn label_equality_is_string_equality() {
        assert_eq!(CellLabel::from("A1"), CellLabel::new("A1"));
        assert_ne!(CellLabel::from("A1"), CellLabel::from("A01"));
    }
}
