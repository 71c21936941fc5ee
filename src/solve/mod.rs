//! # 路径求解
//!
//! 两种互补的搜索：
//!
//! * [`explore()`]（权威实现）——深度优先穷举所有从入口到末行的简单路径，
//!   回溯共享同一路径栈，记录时做快照；随后从路径集中选出最短与最长路径。
//! * [`find_exit`]——广度优先，只探测唯一出口，不重建路径，线性于栅格面积。
//!
//! 两者都在探索过程中强制唯一出口不变量：一旦到达第二个不同的末行单元格，
//! 立即以 [`MazeError::MultipleExits`](crate::grid::MazeError) 失败。
//! 找不到任何出口不是错误，对应 `None`。

pub mod bfs;
pub mod explore;
pub mod path_graph;

pub use bfs::find_exit;
pub use explore::{Exploration, SolveResult, explore, solve};
pub use path_graph::PathGraph;
