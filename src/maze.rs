use crate::config::MazeConfig;
use crate::error::Result;
use crate::generators::generate;
use crate::grids::cell_grid::Grid;
use crate::grids::Coord;
use crate::solvers::solve;
use log::info;
use rand::prelude::*;

/// A generated maze together with the two cells the lightning path joins:
/// one on the top row and one on the bottom row.
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
    seed: Option<u64>,
}

impl Maze {
    pub fn new(config: &MazeConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut maze = Self::with_rng(config.width, config.height, &mut rng)?;
        maze.seed = Some(seed);

        info!(
            "built {}x{} maze with seed {}, start {} end {}",
            config.width, config.height, seed, maze.start, maze.end
        );
        Ok(maze)
    }

    /// Random start column on the top row, random end column on the bottom
    /// row, maze grown from the start.
    pub fn with_rng(width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Self> {
        let grid = Grid::with_dims(width, height)?;
        let start = Coord::new(rng.gen_range(0, width), 0);
        let end = Coord::new(rng.gen_range(0, width), height - 1);

        Self::build(grid, start, end, rng)
    }

    pub fn with_endpoints(
        width: usize,
        height: usize,
        start: Coord,
        end: Coord,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let grid = Grid::with_dims(width, height)?;
        grid.check_bounds(end)?;

        Self::build(grid, start, end, rng)
    }

    fn build(mut grid: Grid, start: Coord, end: Coord, rng: &mut dyn RngCore) -> Result<Self> {
        generate(&mut grid, start, rng)?;
        Ok(Self {
            grid,
            start,
            end,
            seed: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Seed the maze was built from, when built through `Maze::new`.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The unique route from start to end.
    pub fn solve(&self) -> Result<Vec<Coord>> {
        solve(&self.grid, self.start, self.end)
    }
}
