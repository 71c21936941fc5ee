//! 命令行入口：读取迷宫定义文件，校验、求解并输出报告.
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use RustMaze::grid::io::{read_definition, write_json};
use RustMaze::report::{SolveReport, render_grid};
use RustMaze::solve::PathGraph;

#[derive(Debug, Parser)]
#[command(
    name = "mz",
    version,
    about = "Grid maze validator and exhaustive path solver"
)]
struct Args {
    /// Maze definition file (.json or .ron)
    definition: PathBuf,

    /// Only detect the exit (breadth-first), skipping path enumeration
    #[arg(long)]
    quick: bool,

    /// Render the maze grid, with the min path overlaid when solved
    #[arg(long)]
    grid: bool,

    /// Write the traversal graph in Graphviz dot format to this path
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Also write the report as JSON to this path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    if std::env::var("MZ_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MZ_LOG")
            .write_style("MZ_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args = Args::parse();

    let definition = read_definition(&args.definition)
        .with_context(|| format!("failed to read maze definition {:?}", args.definition))?;
    let maze = definition.into_maze()?;

    if args.quick {
        match maze.find_exit()? {
            Some(exit) => println!("exit: {exit}"),
            None => println!("no exit reachable from the entrance"),
        }
        return Ok(());
    }

    let started = Instant::now();
    let exploration = maze.explore()?;
    let analysis_time = started.elapsed();

    if let Some(path) = &args.dot {
        PathGraph::from_exploration(&exploration)
            .write_dot(path)
            .with_context(|| format!("failed to write dot file {path:?}"))?;
    }

    let report = SolveReport::build(&maze, exploration, analysis_time);

    if args.grid {
        print!("{}", render_grid(&maze, report.min_path.as_deref())?);
    }
    print!("{report}");

    if let Some(path) = &args.output {
        write_json(path, &report)
            .with_context(|| format!("failed to write report {path:?}"))?;
    }

    Ok(())
}
