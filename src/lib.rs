//! # RustMaze
//!
//! Exhaustive solver for rectangular grid mazes addressed by letter+number
//! cell labels (`A1`, `H12`). A maze has one entrance, a set of wall cells
//! and, by construction, at most one exit on its far boundary row; the
//! solver enumerates every simple path from the entrance to that row and
//! derives the shortest and the longest one.
//!
//! The two entry points collaborating services consume:
//!
//! * [`grid::validate()`]: syntactic and bounds checking of a raw
//!   definition (`"8x8"`, wall labels, entrance label);
//! * [`solve::solve()`]: exhaustive depth-first path enumeration over a
//!   validated [`grid::Maze`], enforcing the single-exit invariant.
//!
//! Both fail with [`grid::MazeError`]; an unsolvable maze is reported as
//! `None`, not as an error.
#![warn(non_snake_case)]

pub mod grid;
pub mod report;
pub mod solve;

pub use grid::{CellIndex, CellLabel, GridSize, Maze, MazeError, validate};
pub use report::SolveReport;
pub use solve::{Exploration, SolveResult, explore, find_exit, solve};
