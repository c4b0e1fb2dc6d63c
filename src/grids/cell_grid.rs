use crate::error::{MazeError, Result};
use crate::grids::{Coord, Dimensions, Direction, Neighborhood};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coords: Coord,
    connections: Vec<Direction>,
}

impl Cell {
    fn new(coords: Coord) -> Self {
        Self {
            coords,
            connections: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn coords(&self) -> Coord {
        self.coords
    }

    /// Openings out of this cell, in the order they were carved.
    #[inline]
    pub fn connections(&self) -> &[Direction] {
        &self.connections
    }

    #[inline]
    pub fn is_connected(&self, direction: Direction) -> bool {
        self.connections.contains(&direction)
    }
}

pub struct Grid {
    dims: Dimensions,

    // row-major, index = y * width + x
    cells: Vec<Cell>,
    edge_count: usize,
}

impl Grid {
    pub fn with_dims(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Coord::new(x, y))))
            .collect();

        Ok(Self {
            dims: Dimensions { width, height },
            cells,
            edge_count: 0,
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub(crate) fn index_of(&self, coord: Coord) -> usize {
        (self.dims.width * coord.y) + coord.x
    }

    pub fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.dims.contains(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                width: self.dims.width,
                height: self.dims.height,
            })
        }
    }

    pub fn cell_at(&self, coord: Coord) -> Result<&Cell> {
        self.check_bounds(coord)?;
        Ok(&self.cells[self.index_of(coord)])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinate one step away in `direction`. Not bounds checked, so the
    /// result is garbage unless `is_direction_valid` holds.
    #[inline]
    pub fn neighbor_coord(&self, coord: Coord, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        Coord::new(
            coord.x.wrapping_add(dx as usize),
            coord.y.wrapping_add(dy as usize),
        )
    }

    pub fn is_direction_valid(&self, coord: Coord, direction: Direction) -> bool {
        match direction {
            Direction::Up => coord.y > 0,
            Direction::Down => coord.y + 1 < self.dims.height,
            Direction::Left => coord.x > 0,
            Direction::Right => coord.x + 1 < self.dims.width,
        }
    }

    /// Opens the wall between `coord` and its neighbour in `direction`.
    ///
    /// Both cells record the opening so the passage can be walked either way.
    /// A direction leading off the grid, or one that is already open, is
    /// ignored.
    pub fn add_connection(&mut self, coord: Coord, direction: Direction) -> Result<()> {
        self.check_bounds(coord)?;
        if !self.is_direction_valid(coord, direction) {
            return Ok(());
        }

        let index = self.index_of(coord);
        if self.cells[index].is_connected(direction) {
            return Ok(());
        }
        self.cells[index].connections.push(direction);

        let neighbor = self.neighbor_coord(coord, direction);
        let neighbor_index = self.index_of(neighbor);
        self.cells[neighbor_index].connections.push(-direction);

        self.edge_count += 1;
        Ok(())
    }

    pub fn neighborhood_of(&self, coord: Coord) -> Neighborhood {
        let mut neighbors = Neighborhood::new();
        for &direction in Direction::ALL.iter() {
            if self.is_direction_valid(coord, direction) {
                neighbors.set(direction, Some(self.neighbor_coord(coord, direction)));
            }
        }
        neighbors
    }

    /// Neighbours reachable from `coord` through an opening.
    pub fn open_neighbors(&self, coord: Coord) -> Result<Neighborhood> {
        let cell = self.cell_at(coord)?;
        let mut neighbors = Neighborhood::new();
        for &direction in cell.connections() {
            neighbors.set(direction, Some(self.neighbor_coord(coord, direction)));
        }
        Ok(neighbors)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Every opening exactly once, as (upper/left cell, lower/right cell).
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.iter().flat_map(move |cell| {
            cell.connections
                .iter()
                .filter(|&&dir| dir == Direction::Down || dir == Direction::Right)
                .map(move |&dir| (cell.coords, self.neighbor_coord(cell.coords, dir)))
        })
    }
}

#[cfg(test)]
mod test_cell_grid {
    use super::*;

    #[test]
    fn it_works() {
        let grid = Grid::with_dims(4, 3).unwrap();

        assert_eq!(grid.len(), 12);
        assert_eq!(grid.edge_count(), 0);
        assert!(grid.cells().all(|cell| cell.connections().is_empty()));
        assert_eq!(grid.cell_at(Coord::new(3, 2)).unwrap().coords(), Coord::new(3, 2));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::with_dims(0, 5).err(),
            Some(MazeError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::with_dims(5, 0).is_err());
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let grid = Grid::with_dims(2, 2).unwrap();
        assert_eq!(
            grid.cell_at(Coord::new(2, 0)).err(),
            Some(MazeError::OutOfBounds {
                coord: Coord::new(2, 0),
                width: 2,
                height: 2
            })
        );
        assert!(grid.cell_at(Coord::new(0, 2)).is_err());
    }

    #[test]
    fn direction_validity_at_edges() {
        let grid = Grid::with_dims(3, 3).unwrap();
        let corner = Coord::new(0, 0);
        assert!(!grid.is_direction_valid(corner, Direction::Up));
        assert!(!grid.is_direction_valid(corner, Direction::Left));
        assert!(grid.is_direction_valid(corner, Direction::Down));
        assert!(grid.is_direction_valid(corner, Direction::Right));

        let far = Coord::new(2, 2);
        assert!(!grid.is_direction_valid(far, Direction::Down));
        assert!(!grid.is_direction_valid(far, Direction::Right));
        assert!(grid.is_direction_valid(far, Direction::Up));
        assert!(grid.is_direction_valid(far, Direction::Left));
    }

    #[test]
    fn neighbor_coord_offsets() {
        let grid = Grid::with_dims(3, 3).unwrap();
        let mid = Coord::new(1, 1);
        assert_eq!(grid.neighbor_coord(mid, Direction::Up), Coord::new(1, 0));
        assert_eq!(grid.neighbor_coord(mid, Direction::Down), Coord::new(1, 2));
        assert_eq!(grid.neighbor_coord(mid, Direction::Left), Coord::new(0, 1));
        assert_eq!(grid.neighbor_coord(mid, Direction::Right), Coord::new(2, 1));
    }

    #[test]
    fn connections_are_symmetric() {
        let mut grid = Grid::with_dims(2, 2).unwrap();
        grid.add_connection(Coord::new(0, 0), Direction::Right).unwrap();

        assert!(grid.cell_at(Coord::new(0, 0)).unwrap().is_connected(Direction::Right));
        assert!(grid.cell_at(Coord::new(1, 0)).unwrap().is_connected(Direction::Left));
        assert_eq!(grid.edge_count(), 1);

        // the same wall from the other side is already open
        grid.add_connection(Coord::new(1, 0), Direction::Left).unwrap();
        assert_eq!(grid.edge_count(), 1);
        assert_eq!(
            grid.edges().collect::<Vec<_>>(),
            vec![(Coord::new(0, 0), Coord::new(1, 0))]
        );
    }

    #[test]
    fn boundary_connections_are_ignored() {
        let mut grid = Grid::with_dims(3, 2).unwrap();
        for cell in 0..grid.len() {
            let coord = Coord::new(cell % 3, cell / 3);
            for &dir in Direction::ALL.iter() {
                grid.add_connection(coord, dir).unwrap();
            }
        }

        let dims = grid.dims();
        for cell in grid.cells() {
            for &dir in cell.connections() {
                assert!(dims.contains(grid.neighbor_coord(cell.coords(), dir)));
            }
        }
        // every interior wall of a 3x2 grid
        assert_eq!(grid.edge_count(), 7);
    }

    #[test]
    fn add_connection_out_of_bounds() {
        let mut grid = Grid::with_dims(1, 1).unwrap();
        assert!(grid.add_connection(Coord::new(1, 1), Direction::Up).is_err());
    }

    #[test]
    fn open_neighbors_follow_connections() {
        let mut grid = Grid::with_dims(3, 3).unwrap();
        let mid = Coord::new(1, 1);
        grid.add_connection(mid, Direction::Up).unwrap();
        grid.add_connection(Coord::new(2, 1), Direction::Left).unwrap();

        let open: Vec<_> = grid.open_neighbors(mid).unwrap().map(|(c, _)| c).collect();
        assert_eq!(open, vec![Coord::new(1, 0), Coord::new(2, 1)]);
        assert_eq!(grid.neighborhood_of(Coord::new(0, 0)).count(), 2);
    }
}
