//! # 迷宫静态结构（Grid/Maze 定义）
//!
//! 设栅格尺寸 `(R, C)`，单元格集合 `G = [0, R) × [0, C)`。每个单元格有两种
//! 等价表示并且可以互相转换：
//!
//! * 零基坐标 `(row, col) ∈ G`；
//! * 标签 `L = chr('A' + row) ++ str(col + 1)`，即一个大写行字母加 1 基列号。
//!
//! 合法标签文法为 `[A-Z][1-9][0-9]*`，与转换构成双射：对任意合法标签
//! `label_to_index` 与 `index_to_label` 严格互逆。
//!
//! 校验入口 [`validate()`] 按固定顺序检查一份原始定义（尺寸描述符 →
//! 全部标签形状 → 全部标签边界），通过后由 [`Maze::parse`] 构造不可变的
//! 聚合结构，供 [`solve`](crate::solve) 模块穷举求解。
//!
//! ## 示例
//!
//! ```rust
//! use RustMaze::grid::{validate, GridSize, Maze};
//!
//! let walls = vec!["B1".to_string(), "B2".to_string()];
//! assert_eq!(validate("3x3", &walls, "A1").unwrap(), GridSize::new(3, 3));
//!
//! let maze = Maze::parse("3x3", &walls, "A1").unwrap();
//! assert_eq!(maze.entrance().as_str(), "A1");
//! assert_eq!(maze.walls().len(), 2);
//! ```

pub mod cell_map;
pub mod codec;
pub mod ids;
pub mod io;
pub mod structure;
pub mod validate;

pub use cell_map::CellMap;
pub use codec::{index_to_label, label_to_index};
pub use ids::CellId;
pub use io::{IoError, MazeDefinition};
pub use structure::{CellIndex, CellLabel, GridSize, Maze, MazeError};
pub use validate::validate;
