//! 将发现的路径集聚合为移动图并导出 Graphviz dot.
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use petgraph::Graph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::grid::CellLabel;
use crate::solve::explore::Exploration;

/// Union of every discovered path as a directed graph: one node per
/// visited cell, one edge per traversed move, duplicates collapsed.
pub struct PathGraph {
    pub graph: Graph<CellLabel, ()>,
}

impl PathGraph {
    pub fn from_exploration(exploration: &Exploration) -> Self {
        let mut graph = Graph::new();
        let mut nodes: HashMap<CellLabel, NodeIndex> = HashMap::new();

        for path in &exploration.paths {
            if let Some(first) = path.first() {
                // 单格路径（入口即出口）也要出现在图中。
                intern(&mut graph, &mut nodes, first);
            }
            for step in path.windows(2) {
                let from = intern(&mut graph, &mut nodes, &step[0]);
                let to = intern(&mut graph, &mut nodes, &step[1]);
                graph.update_edge(from, to, ());
            }
        }

        Self { graph }
    }

    /// Renders the move graph in dot format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        let _ = writeln!(&mut dot, "digraph MazePaths {{");
        let _ = writeln!(&mut dot, "    rankdir=TB;");
        let _ = writeln!(&mut dot, "    node [fontname=\"Helvetica\", shape=box];");

        for idx in self.graph.node_indices() {
            let _ = writeln!(
                &mut dot,
                "    cell_{} [label=\"{}\"];",
                idx.index(),
                self.graph[idx]
            );
        }
        for edge in self.graph.edge_references() {
            let _ = writeln!(
                &mut dot,
                "    cell_{} -> cell_{};",
                edge.source().index(),
                edge.target().index()
            );
        }

        let _ = writeln!(&mut dot, "}}");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot())
    }
}

fn intern(
    graph: &mut Graph<CellLabel, ()>,
    nodes: &mut HashMap<CellLabel, NodeIndex>,
    label: &CellLabel,
) -> NodeIndex {
    match nodes.get(label) {
        Some(idx) => *idx,
        None => {
            let idx = graph.add_node(label.clone());
            nodes.insert(label.clone(), idx);
            idx
        }
    }
}
