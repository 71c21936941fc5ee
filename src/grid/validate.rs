//! 迷宫定义校验：尺寸描述符、标签形状与边界约束.
//!
//! 校验顺序是观察到的对外契约的一部分：先整体检查尺寸描述符，再对
//! `walls ∪ {entrance}` 全量做形状检查，最后才做边界检查。同类检查内部
//! 遇到第一个失败即返回。
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::grid::codec;
use crate::grid::structure::{CellLabel, GridSize, Maze, MazeError};

static GRID_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)x([0-9]+)$").expect("grid size pattern is valid"));

/// Rows above `Z` have no single-letter label, so the validator rejects
/// taller grids instead of letting the codec fail later.
const MAX_ROWS: u32 = 26;

/// Checks a raw maze definition and returns its parsed grid extent.
///
/// The entrance is checked as part of the same batch as the walls: first
/// every label's shape, then every label's bounds, so a maze containing
/// both a malformed and an out-of-bounds cell always reports the malformed
/// one.
pub fn validate(grid_size: &str, walls: &[String], entrance: &str) -> Result<GridSize, MazeError> {
    let size = parse_grid_size(grid_size)?;

    for label in walls.iter().map(String::as_str).chain([entrance]) {
        if !codec::matches_shape(label) {
            return Err(MazeError::MalformedCell);
        }
    }

    for label in walls.iter().map(String::as_str).chain([entrance]) {
        let label = CellLabel::from(label);
        let index = codec::label_to_index(&label)?;
        if !size.contains(index) {
            return Err(MazeError::OutOfBounds(label));
        }
    }

    Ok(size)
}

fn parse_grid_size(descriptor: &str) -> Result<GridSize, MazeError> {
    let invalid = || MazeError::InvalidGridSize(descriptor.to_owned());

    let captures = GRID_SIZE_PATTERN.captures(descriptor).ok_or_else(invalid)?;
    let rows: u32 = captures[1].parse().map_err(|_| invalid())?;
    let cols: u32 = captures[2].parse().map_err(|_| invalid())?;

    if rows == 0 || cols == 0 {
        return Err(invalid());
    }
    if rows > MAX_ROWS {
        return Err(MazeError::UnaddressableRows(rows));
    }

    Ok(GridSize::new(rows, cols))
}

impl Maze {
    /// Validates a raw definition and builds the immutable aggregate.
    ///
    /// Duplicate wall entries collapse; a wall entry equal to the entrance
    /// is retained as a wall but does not block the entrance itself.
    pub fn parse(grid_size: &str, walls: &[String], entrance: &str) -> Result<Self, MazeError> {
        let size = validate(grid_size, walls, entrance)?;

        let walls: IndexSet<CellLabel> = walls.iter().map(|label| CellLabel::from(label.as_str())).collect();
        log::debug!(
            "validated maze {size}: entrance {entrance}, {} walls",
            walls.len()
        );

        Ok(Maze::from_validated(size, CellLabel::from(entrance), walls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn well_formed_definitions_yield_grid_size() {
        let size = validate("8x8", &labels(&["A2", "A3"]), "A1").unwrap();
        assert_eq!(size, GridSize::new(8, 8));

        let size = validate("4x12", &[], "A1").unwrap();
        assert_eq!(size, GridSize::new(4, 12));
    }

    #[test]
    fn malformed_grid_size_echoes_the_input() {
        for descriptor in ["8xs", "8x8x", "x8x8", "8X8", "8", "8x", "", " 8x8"] {
            let err = validate(descriptor, &[], "A1").unwrap_err();
            assert_eq!(err, MazeError::InvalidGridSize(descriptor.to_owned()));
            assert!(
                err.to_string().contains(descriptor),
                "message should echo {descriptor:?}"
            );
        }
    }

    #[test]
    fn zero_dimensions_are_invalid() {
        for descriptor in ["0x8", "8x0", "0x0"] {
            assert_eq!(
                validate(descriptor, &[], "A1").unwrap_err(),
                MazeError::InvalidGridSize(descriptor.to_owned())
            );
        }
    }

    #[test]
    fn grids_taller_than_the_alphabet_are_rejected() {
        assert_eq!(
            validate("27x8", &[], "A1").unwrap_err(),
            MazeError::UnaddressableRows(27)
        );
        assert!(validate("26x8", &[], "A1").is_ok());
    }

    #[test]
    fn malformed_cells_surface_the_pattern_not_the_value() {
        let err = validate("8x8", &labels(&["As2", "A3"]), "A1").unwrap_err();
        assert_eq!(err, MazeError::MalformedCell);
        assert_eq!(
            err.to_string(),
            "cell coordinates must match pattern letter+digits"
        );
    }

    #[test]
    fn entrance_is_checked_in_the_same_batch() {
        assert_eq!(
            validate("8x8", &labels(&["A2", "A3"]), "Ms1").unwrap_err(),
            MazeError::MalformedCell
        );
        assert_eq!(
            validate("8x8", &labels(&["A2", "A3"]), "M1").unwrap_err(),
            MazeError::OutOfBounds(CellLabel::from("M1"))
        );
    }

    #[test]
    fn out_of_bounds_names_the_offending_label() {
        let err = validate("8x8", &labels(&["M2", "A3"]), "A1").unwrap_err();
        assert_eq!(err, MazeError::OutOfBounds(CellLabel::from("M2")));
        assert_eq!(err.to_string(), "coordinates M2 are outside maze");

        // Column bound, not only the row bound.
        assert_eq!(
            validate("8x8", &labels(&["A9"]), "A1").unwrap_err(),
            MazeError::OutOfBounds(CellLabel::from("A9"))
        );
    }

    #[test]
    fn all_shapes_are_checked_before_any_bounds() {
        // M2 is out of bounds and listed first; the malformed As3 must win.
        assert_eq!(
            validate("8x8", &labels(&["M2", "As3"]), "A1").unwrap_err(),
            MazeError::MalformedCell
        );
    }

    #[test]
    fn parse_builds_the_aggregate_and_collapses_duplicates() {
        let maze = Maze::parse("8x8", &labels(&["A2", "A3", "A2"]), "A1").unwrap();
        assert_eq!(maze.size(), GridSize::new(8, 8));
        assert_eq!(maze.entrance(), &CellLabel::from("A1"));
        assert_eq!(maze.walls().len(), 2);
        assert!(maze.is_wall(&CellLabel::from("A3")));
    }

    #[test]
    fn entrance_may_appear_in_the_wall_list() {
        let maze = Maze::parse("8x8", &labels(&["A1", "A2"]), "A1").unwrap();
        assert!(maze.is_wall(maze.entrance()));
    }
}
