use crate::error::Result;
use crate::generators::Generator;
use crate::grids::cell_grid::Grid;
use crate::grids::{Coord, Dimensions, Direction};
use log::trace;
use rand::prelude::*;

/// One level of the depth-first walk: a cell and the directions it has yet
/// to try, already shuffled. Popping from the back picks uniformly at random
/// without replacement.
struct Frame {
    coords: Coord,
    directions: Vec<Direction>,
}

impl Frame {
    fn new(coords: Coord, rng: &mut dyn RngCore) -> Self {
        let mut directions = Direction::ALL.to_vec();
        directions.shuffle(rng);
        Self { coords, directions }
    }
}

/// Randomized depth-first maze generator with an explicit stack, so grid
/// size is not limited by call-stack depth.
pub struct RecursiveBacktracker {
    dims: Dimensions,
    start: Coord,
    stack: Vec<Frame>,
    // cells already part of the spanning tree
    in_tree: Vec<bool>,
    started: bool,
    pub done: bool,
}

impl RecursiveBacktracker {
    pub fn new(grid: &Grid, start: Coord) -> Result<Self> {
        grid.check_bounds(start)?;

        let mut in_tree = vec![false; grid.len()];
        in_tree[grid.index_of(start)] = true;

        Ok(Self {
            dims: grid.dims(),
            start,
            stack: Vec::new(),
            in_tree,
            started: false,
            done: false,
        })
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    /// Cell the walk is currently extending from.
    pub fn cursor(&self) -> Option<Coord> {
        self.stack.last().map(|frame| frame.coords)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn in_tree(&self, grid: &Grid, coord: Coord) -> bool {
        grid.dims().contains(coord) && self.in_tree[grid.index_of(coord)]
    }
}

impl Generator for RecursiveBacktracker {
    fn step_generation(&mut self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<()> {
        debug_assert_eq!(grid.dims(), self.dims, "generator used on a different grid");

        if !self.started {
            self.started = true;
            self.stack.push(Frame::new(self.start, rng));
        }

        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => {
                self.done = true;
                return Ok(());
            }
        };
        let current = frame.coords;

        while let Some(direction) = frame.directions.pop() {
            if !grid.is_direction_valid(current, direction) {
                continue;
            }

            let next = grid.neighbor_coord(current, direction);
            let next_idx = grid.index_of(next);
            // joining a cell already in the tree would close a loop
            if self.in_tree[next_idx] {
                continue;
            }

            grid.add_connection(current, direction)?;
            self.in_tree[next_idx] = true;
            self.stack.push(Frame::new(next, rng));
            return Ok(());
        }

        trace!("backtracking from {}", current);
        self.stack.pop();
        if self.stack.is_empty() {
            self.done = true;
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
