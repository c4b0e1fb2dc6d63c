use bolt_maze::{Maze, MazeConfig};
use clap::Parser;

/// Generates a perfect maze and finds the path from its top row to its bottom row
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = bolt_maze::config::DEFAULT_DIMS.0)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = bolt_maze::config::DEFAULT_DIMS.1)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print every cell of the path, one per line
    #[arg(long)]
    print_path: bool,
}

impl From<&Args> for MazeConfig {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let maze = Maze::new(&MazeConfig::from(&args))?;
    let path = maze.solve()?;

    println!(
        "{}x{} seed={} start={} end={} path_len={}",
        maze.grid().width(),
        maze.grid().height(),
        maze.seed().unwrap_or_default(),
        maze.start(),
        maze.end(),
        path.len()
    );

    if args.print_path {
        for coord in &path {
            println!("{} {}", coord.x, coord.y);
        }
    }

    Ok(())
}
