pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use grids::cell_grid::{Cell, Grid};
pub use grids::{Coord, Direction};
pub use maze::Maze;
