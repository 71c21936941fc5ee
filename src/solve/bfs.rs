//! 广度优先的出口探测：只检测唯一出口，不重建路径.
use std::collections::VecDeque;

use crate::grid::{CellIndex, CellLabel, CellMap, Maze, MazeError, codec};
use crate::solve::explore::{neighbors, wall_map};

/// Finds the unique reachable last-row cell without enumerating paths.
///
/// Enforces the same single-exit invariant as the depth-first explorer but
/// visits every reachable cell exactly once, so it stays linear in the grid
/// area. Use it when only the exit (not the path sequences) is needed.
pub fn find_exit(maze: &Maze) -> Result<Option<CellLabel>, MazeError> {
    let size = maze.size();
    let walls = wall_map(maze)?;
    let mut visited = CellMap::filled(size.cells(), false);
    let mut frontier = VecDeque::new();

    // 与深度优先版本一致：入口无条件进入。
    let entrance = codec::label_to_index(maze.entrance())?;
    visited[size.cell_id(entrance)] = true;
    frontier.push_back(entrance);

    let mut exit: Option<CellIndex> = None;
    while let Some(cell) = frontier.pop_front() {
        if cell.row == size.last_row() {
            if let Some(first) = exit
                && first != cell
            {
                return Err(MazeError::MultipleExits {
                    first: codec::index_to_label(first)?,
                    second: codec::index_to_label(cell)?,
                });
            }
            exit = Some(cell);
        }

        for neighbor in neighbors(size, cell) {
            let id = size.cell_id(neighbor);
            if !walls[id] && !visited[id] {
                visited[id] = true;
                frontier.push_back(neighbor);
            }
        }
    }

    exit.map(codec::index_to_label).transpose()
}

impl Maze {
    /// See [`find_exit`].
    pub fn find_exit(&self) -> Result<Option<CellLabel>, MazeError> {
        find_exit(self)
    }
}
