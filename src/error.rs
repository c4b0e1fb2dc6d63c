use crate::grids::Coord;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("{coord} is outside of a {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    #[error("no path from {start} to {end}")]
    NoPathFound { start: Coord, end: Coord },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
