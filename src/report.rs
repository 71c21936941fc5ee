//! 求解报告：统计信息、文本渲染与机器可读输出.
use std::fmt;
use std::time::Duration;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::grid::{CellIndex, CellLabel, CellMap, Maze, MazeError, codec};
use crate::solve::Exploration;
use crate::solve::explore::wall_map;

/// Outcome of one solve together with exploration statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub grid_size: String,
    pub entrance: CellLabel,
    pub walls: usize,
    /// Number of simple entrance-to-exit paths the explorer discovered.
    pub paths_found: usize,
    pub exit: Option<CellLabel>,
    pub min_path: Option<Vec<CellLabel>>,
    pub max_path: Option<Vec<CellLabel>>,
    pub analysis_time: Duration,
}

impl SolveReport {
    /// Derives the report from a finished exploration.
    pub fn build(maze: &Maze, exploration: Exploration, analysis_time: Duration) -> Self {
        let paths_found = exploration.paths.len();
        let result = exploration.into_result();
        Self {
            grid_size: maze.size().to_string(),
            entrance: maze.entrance().clone(),
            walls: maze.walls().len(),
            paths_found,
            exit: result.as_ref().map(|r| r.exit.clone()),
            min_path: result.as_ref().map(|r| r.min_path.clone()),
            max_path: result.map(|r| r.max_path),
            analysis_time,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.exit.is_some()
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "maze {}, entrance {}, {} wall(s)",
            self.grid_size, self.entrance, self.walls
        )?;
        match &self.exit {
            Some(exit) => {
                writeln!(f, "exit: {exit}")?;
                writeln!(f, "paths found: {}", self.paths_found)?;
                if let Some(path) = &self.min_path {
                    writeln!(f, "min path ({}): {}", path.len(), join(path))?;
                }
                if let Some(path) = &self.max_path {
                    writeln!(f, "max path ({}): {}", path.len(), join(path))?;
                }
            }
            None => writeln!(f, "no exit reachable from the entrance")?,
        }
        writeln!(f, "analysis time: {:?}", self.analysis_time)
    }
}

fn join(path: &[CellLabel]) -> String {
    path.iter().map(CellLabel::as_str).join(" -> ")
}

/// Draws the maze as one text line per row: `E` entrance, `#` wall, `*`
/// overlay path, `.` open cell. The entrance glyph wins over the others.
pub fn render_grid(maze: &Maze, overlay: Option<&[CellLabel]>) -> Result<String, MazeError> {
    let size = maze.size();
    let walls = wall_map(maze)?;

    let mut on_path = CellMap::filled(size.cells(), false);
    if let Some(path) = overlay {
        for label in path {
            on_path[size.cell_id(codec::label_to_index(label)?)] = true;
        }
    }
    let entrance = size.cell_id(codec::label_to_index(maze.entrance())?);

    let mut out = String::new();
    for row in 0..size.rows {
        // Row letters are guaranteed by validation to stay within A..Z.
        out.push(char::from(b'A' + row as u8));
        out.push(' ');
        for col in 0..size.cols {
            let id = size.cell_id(CellIndex::new(row, col));
            out.push(if id == entrance {
                'E'
            } else if walls[id] {
                '#'
            } else if on_path[id] {
                '*'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> Maze {
        let walls = vec!["C1".to_string(), "C2".to_string()];
        Maze::parse("3x3", &walls, "A1").unwrap()
    }

    #[test]
    fn report_carries_result_and_statistics() {
        let maze = maze();
        let exploration = maze.explore().unwrap();
        let report = SolveReport::build(&maze, exploration, Duration::from_millis(3));

        assert!(report.is_solved());
        assert_eq!(report.grid_size, "3x3");
        assert_eq!(report.paths_found, 4);
        assert_eq!(report.exit, Some(CellLabel::from("C3")));
        assert_eq!(report.min_path.as_ref().map(Vec::len), Some(5));
        assert_eq!(report.max_path.as_ref().map(Vec::len), Some(7));

        let text = report.to_string();
        assert!(text.contains("exit: C3"));
        assert!(text.contains("min path (5): A1 -> B1 -> B2 -> B3 -> C3"));
    }

    #[test]
    fn unsolved_report_says_so() {
        let walls = vec!["B1".to_string(), "A2".to_string()];
        let maze = Maze::parse("3x3", &walls, "A1").unwrap();
        let report = SolveReport::build(&maze, maze.explore().unwrap(), Duration::ZERO);

        assert!(!report.is_solved());
        assert!(report.to_string().contains("no exit reachable"));
    }

    #[test]
    fn grid_rendering_overlays_the_path() {
        let maze = maze();
        let result = maze.solve().unwrap().unwrap();
        let text = render_grid(&maze, Some(&result.min_path)).unwrap();
        assert_eq!(text, "A E..\nB ***\nC ##*\n");
    }

    #[test]
    fn grid_rendering_without_overlay() {
        let text = render_grid(&maze(), None).unwrap();
        assert_eq!(text, "A E..\nB ...\nC ##.\n");
    }
}
