use crate::error::{MazeError, Result};
use crate::grids::cell_grid::Grid;
use crate::grids::Coord;
use crate::solvers::Pathfinder;
use log::{debug, warn};

/// Depth-first path search over a grid's openings.
///
/// Keeps its own visited marks, cleared at the start of every search, so one
/// grid can be solved any number of times (and by several solvers at once,
/// since the grid is only borrowed).
#[derive(Debug, Default)]
pub struct Dfs {
    visited: Vec<bool>,
    explored: usize,
}

impl Dfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells marked during the last search.
    pub fn explored(&self) -> usize {
        self.explored
    }

    fn reset(&mut self, grid: &Grid) {
        self.visited.clear();
        self.visited.resize(grid.len(), false);
        self.explored = 0;
    }

    fn mark(&mut self, grid: &Grid, coord: Coord) -> bool {
        let idx = grid.index_of(coord);
        if self.visited[idx] {
            return false;
        }
        self.visited[idx] = true;
        self.explored += 1;
        true
    }
}

impl Pathfinder for Dfs {
    fn find_path(&mut self, grid: &Grid, start: Coord, end: Coord) -> Result<Vec<Coord>> {
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        self.reset(grid);
        self.mark(grid, start);

        if start == end {
            return Ok(vec![start]);
        }

        // (cell, index of the next connection to try)
        let mut stack: Vec<(Coord, usize)> = vec![(start, 0)];

        while let Some((current, cursor)) = stack.last_mut() {
            let current = *current;
            let connections = grid.cell_at(current)?.connections();

            let direction = match connections.get(*cursor) {
                Some(&direction) => direction,
                None => {
                    stack.pop();
                    continue;
                }
            };
            *cursor += 1;

            let next = grid.neighbor_coord(current, direction);
            if !self.mark(grid, next) {
                continue;
            }

            if next == end {
                let mut path: Vec<Coord> = stack.iter().map(|&(coord, _)| coord).collect();
                path.push(next);
                debug!(
                    "found path {} -> {} of length {} after exploring {} cells",
                    start,
                    end,
                    path.len(),
                    self.explored
                );
                return Ok(path);
            }

            stack.push((next, 0));
        }

        warn!(
            "no path {} -> {} after exploring {} cells",
            start, end, self.explored
        );
        Err(MazeError::NoPathFound { start, end })
    }
}
