pub mod dfs;

use crate::error::Result;
use crate::grids::cell_grid::Grid;
use crate::grids::Coord;

pub use dfs::Dfs;

pub trait Pathfinder {
    /// Ordered cells from `start` to `end`, both included.
    fn find_path(&mut self, grid: &Grid, start: Coord, end: Coord) -> Result<Vec<Coord>>;
}

pub fn solve(grid: &Grid, start: Coord, end: Coord) -> Result<Vec<Coord>> {
    Dfs::new().find_path(grid, start, end)
}
