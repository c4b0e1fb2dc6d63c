pub mod backtracker;

use crate::error::Result;
use crate::grids::cell_grid::Grid;
use crate::grids::Coord;
use rand::RngCore;

pub use backtracker::RecursiveBacktracker;

pub trait Generator {
    /// Carves at most one passage, or backtracks one cell.
    fn step_generation(&mut self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<()>;
    fn is_done(&self) -> bool;

    fn generate_maze(&mut self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<()> {
        while !self.is_done() {
            self.step_generation(grid, rng)?;
        }
        Ok(())
    }
}

/// Turns a freshly created `grid` into a perfect maze grown from `start`.
pub fn generate(grid: &mut Grid, start: Coord, rng: &mut dyn RngCore) -> Result<()> {
    let mut generator = RecursiveBacktracker::new(grid, start)?;
    generator.generate_maze(grid, rng)?;

    log::debug!(
        "generated {}x{} maze from {} with {} connections",
        grid.width(),
        grid.height(),
        start,
        grid.edge_count()
    );
    Ok(())
}
