//! 穷举式深度优先路径搜索
//!
//! 从入口出发，对栅格图做完整的简单路径枚举：
//! 1. 共享一个当前路径栈，进入单元格时压栈、邻居穷尽后弹栈（回溯）；
//! 2. 到达末行即记录当前路径的快照，并检查唯一出口不变量；
//! 3. 枚举结束后按路径长度选出最短与最长路径。
//!
//! 除去墙与已访问单元格外没有任何剪枝，最坏情况对栅格面积是指数级的；
//! 调用方对超大输入需要自行限制规模。
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grid::{CellIndex, CellLabel, CellMap, GridSize, Maze, MazeError, codec};

/// Everything the exhaustive search discovered: the unique exit (if any
/// path reached the last row) and every simple entrance-to-exit path in
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    pub exit: Option<CellLabel>,
    pub paths: Vec<Vec<CellLabel>>,
}

/// Shortest and longest discovered paths, by cell count.
///
/// Owned by the caller once computed; the explorer retains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    pub exit: CellLabel,
    pub min_path: Vec<CellLabel>,
    pub max_path: Vec<CellLabel>,
}

impl Exploration {
    /// Selects the result paths. Among paths of equal length the first
    /// discovered wins, for both extremes, so output is deterministic.
    pub fn into_result(self) -> Option<SolveResult> {
        let exit = self.exit?;
        let mut min: Option<&Vec<CellLabel>> = None;
        let mut max: Option<&Vec<CellLabel>> = None;
        for path in &self.paths {
            if min.is_none_or(|shortest| path.len() < shortest.len()) {
                min = Some(path);
            }
            if max.is_none_or(|longest| path.len() > longest.len()) {
                max = Some(path);
            }
        }
        Some(SolveResult {
            exit,
            min_path: min?.clone(),
            max_path: max?.clone(),
        })
    }
}

/// Enumerates all simple paths from the entrance to the last row.
///
/// Fails with [`MazeError::MultipleExits`] as soon as a second distinct
/// last-row cell is reached; two paths ending on the *same* cell are both
/// kept. An empty path set is a legitimate outcome.
pub fn explore(maze: &Maze) -> Result<Exploration, MazeError> {
    let mut explorer = Explorer::new(maze)?;
    // 入口无条件进入，即使它本身被列为墙。
    let entrance = codec::label_to_index(maze.entrance())?;
    explorer.descend(entrance)?;
    explorer.finish()
}

/// Exhaustive exploration followed by min/max selection: the primary entry
/// point for collaborators that store the two derived paths.
pub fn solve(maze: &Maze) -> Result<Option<SolveResult>, MazeError> {
    Ok(explore(maze)?.into_result())
}

impl Maze {
    /// See [`explore`].
    pub fn explore(&self) -> Result<Exploration, MazeError> {
        explore(self)
    }

    /// See [`solve`].
    pub fn solve(&self) -> Result<Option<SolveResult>, MazeError> {
        solve(self)
    }
}

/// Wall occupancy of the grid, one flag per cell.
pub(crate) fn wall_map(maze: &Maze) -> Result<CellMap<bool>, MazeError> {
    let size = maze.size();
    let mut walls = CellMap::filled(size.cells(), false);
    for label in maze.walls() {
        walls[size.cell_id(codec::label_to_index(label)?)] = true;
    }
    Ok(walls)
}

/// In-bounds neighbors in the fixed expansion order down, up, right, left.
/// The order decides which path is discovered first and with it every
/// tie-break, so it must not change.
pub(crate) fn neighbors(size: GridSize, cell: CellIndex) -> SmallVec<[CellIndex; 4]> {
    let mut out = SmallVec::new();
    if cell.row + 1 < size.rows {
        out.push(CellIndex::new(cell.row + 1, cell.col));
    }
    if cell.row > 0 {
        out.push(CellIndex::new(cell.row - 1, cell.col));
    }
    if cell.col + 1 < size.cols {
        out.push(CellIndex::new(cell.row, cell.col + 1));
    }
    if cell.col > 0 {
        out.push(CellIndex::new(cell.row, cell.col - 1));
    }
    out
}

/// Transient search state for one exploration. Local to a single call, so
/// concurrent solves over shared `&Maze` values never contend.
struct Explorer {
    size: GridSize,
    walls: CellMap<bool>,
    on_path: CellMap<bool>,
    path: Vec<CellIndex>,
    paths: Vec<Vec<CellIndex>>,
    exit: Option<CellIndex>,
}

impl Explorer {
    fn new(maze: &Maze) -> Result<Self, MazeError> {
        let size = maze.size();
        Ok(Self {
            size,
            walls: wall_map(maze)?,
            on_path: CellMap::filled(size.cells(), false),
            path: Vec::new(),
            paths: Vec::new(),
            exit: None,
        })
    }

    fn descend(&mut self, cell: CellIndex) -> Result<(), MazeError> {
        let id = self.size.cell_id(cell);
        self.path.push(cell);
        self.on_path[id] = true;

        if cell.row == self.size.last_row() {
            if let Some(exit) = self.exit
                && exit != cell
            {
                return Err(MazeError::MultipleExits {
                    first: codec::index_to_label(exit)?,
                    second: codec::index_to_label(cell)?,
                });
            }
            self.exit = Some(cell);
            // 记录快照；结果路径与活动栈不共享存储。
            self.paths.push(self.path.clone());
        }

        for neighbor in neighbors(self.size, cell) {
            if self.is_open(neighbor) {
                self.descend(neighbor)?;
            }
        }

        self.on_path[id] = false;
        self.path.pop();
        Ok(())
    }

    fn is_open(&self, cell: CellIndex) -> bool {
        let id = self.size.cell_id(cell);
        !self.walls[id] && !self.on_path[id]
    }

    fn finish(self) -> Result<Exploration, MazeError> {
        let exit = self.exit.map(codec::index_to_label).transpose()?;
        let mut paths = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            paths.push(
                path.iter()
                    .copied()
                    .map(codec::index_to_label)
                    .collect::<Result<Vec<_>, _>>()?,
            );
        }
        log::debug!("explored {} path(s) to the last row", paths.len());
        Ok(Exploration { exit, paths })
    }
}
