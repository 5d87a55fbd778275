use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Precomputed neighbor coordinates of one cell, indexed by [`Direction`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Links([Option<Coord2>; 4]);

impl Links {
    fn compute(coords: Coord2, side: Coord) -> Self {
        let mut links = [None; 4];
        for dir in Direction::ALL {
            links[dir.index()] = dir.step(coords, side);
        }
        Self(links)
    }

    fn get(&self, dir: Direction) -> Option<Coord2> {
        self.0[dir.index()]
    }
}

/// Square board of colored cells, sole owner of the cell storage.
///
/// Adjacency is computed once in [`Grid::build`] and never changes, only cell
/// colors are mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    colors: Array2<Color>,
    links: Array2<Links>,
}

impl Grid {
    /// Builds a `side`×`side` grid, asking `assign` for the color of every
    /// `(col, row)` in column-major order.
    pub fn build(side: Coord, mut assign: impl FnMut(Coord, Coord) -> Color) -> Result<Self> {
        if side < 1 {
            return Err(GameError::InvalidConfiguration("board size must be at least 1"));
        }

        let shape = (side, side).to_nd_index();
        let colors = Array2::from_shape_fn(shape, |(x, y)| assign(x as Coord, y as Coord));
        let links = Array2::from_shape_fn(shape, |(x, y)| {
            Links::compute((x as Coord, y as Coord), side)
        });

        Ok(Self { colors, links })
    }

    pub fn side(&self) -> Coord {
        self.colors.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell<'_>> {
        let coords = self.validate_coords(coords)?;
        Ok(Cell { grid: self, coords })
    }

    /// The top-left cell, seed of every flood.
    pub fn origin(&self) -> Cell<'_> {
        Cell {
            grid: self,
            coords: (0, 0),
        }
    }

    /// Whether every cell has the origin's color.
    pub fn all_cells_uniform_color(&self) -> bool {
        let origin = self.origin().color();
        self.colors.iter().all(|&color| color.matches(origin))
    }

    /// Iterates all cells column by column, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        let side = self.side();
        (0..side).flat_map(move |x| {
            (0..side).map(move |y| Cell {
                grid: self,
                coords: (x, y),
            })
        })
    }

    pub(crate) fn paint(&mut self, coords: Coord2, color: Color) {
        self.colors[coords.to_nd_index()] = color;
    }

    fn link(&self, coords: Coord2, dir: Direction) -> Option<Coord2> {
        self.links[coords.to_nd_index()].get(dir)
    }
}

impl Index<Coord2> for Grid {
    type Output = Color;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.colors[coords.to_nd_index()]
    }
}

/// Read-only view of one cell, borrowed from its [`Grid`].
///
/// Only obtainable through the grid, so it always refers to a real board
/// position.
#[derive(Copy, Clone)]
pub struct Cell<'g> {
    grid: &'g Grid,
    coords: Coord2,
}

impl<'g> Cell<'g> {
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn col(&self) -> Coord {
        self.coords.0
    }

    pub fn row(&self) -> Coord {
        self.coords.1
    }

    pub fn color(&self) -> Color {
        self.grid[self.coords]
    }

    pub fn is_origin(&self) -> bool {
        self.coords == (0, 0)
    }

    /// The linked neighbor, or `None` at the board edge.
    pub fn neighbor(&self, dir: Direction) -> Option<Cell<'g>> {
        self.grid.link(self.coords, dir).map(|coords| Cell {
            grid: self.grid,
            coords,
        })
    }

    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, Cell<'g>)> + use<'g> {
        let cell = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.neighbor(dir).map(|neighbor| (dir, neighbor)))
    }
}

impl PartialEq for Cell<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.grid, other.grid) && self.coords == other.coords
    }
}

impl Eq for Cell<'_> {}

impl fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("coords", &self.coords)
            .field("color", &self.color())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const A: Color = Color::new(3, 75, 108);
    const B: Color = Color::new(60, 151, 241);

    fn checkered(side: Coord) -> Grid {
        Grid::build(side, |x, y| if (x + y) % 2 == 0 { A } else { B }).unwrap()
    }

    #[test]
    fn build_rejects_empty_board() {
        assert!(matches!(
            Grid::build(0, |_, _| A),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn build_assigns_colors_by_position() {
        let grid = Grid::build(2, |x, y| if (x, y) == (1, 0) { B } else { A }).unwrap();

        assert_eq!(grid.side(), 2);
        assert_eq!(grid.total_cells(), 4);
        assert_eq!(grid[(0, 0)], A);
        assert_eq!(grid[(1, 0)], B);
        assert_eq!(grid.cell_at((0, 1)).unwrap().color(), A);
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let grid = checkered(3);

        assert_eq!(grid.cell_at((3, 0)).unwrap_err(), GameError::OutOfBounds);
        assert_eq!(grid.cell_at((0, 3)).unwrap_err(), GameError::OutOfBounds);
        assert!(grid.cell_at((2, 2)).is_ok());
    }

    #[test]
    fn neighbor_counts_match_position() {
        let grid = checkered(3);

        assert_eq!(grid.cell_at((1, 1)).unwrap().neighbors().count(), 4);
        assert_eq!(grid.cell_at((1, 0)).unwrap().neighbors().count(), 3);
        assert_eq!(grid.cell_at((0, 0)).unwrap().neighbors().count(), 2);
        assert_eq!(grid.cell_at((2, 2)).unwrap().neighbors().count(), 2);

        let origin = grid.origin();
        assert!(origin.neighbor(Direction::Up).is_none());
        assert!(origin.neighbor(Direction::Left).is_none());
        assert_eq!(origin.neighbor(Direction::Right).unwrap().coords(), (1, 0));
        assert_eq!(origin.neighbor(Direction::Down).unwrap().coords(), (0, 1));
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid = checkered(1);

        assert_eq!(grid.origin().neighbors().count(), 0);
        assert!(grid.all_cells_uniform_color());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = checkered(5);

        for cell in grid.cells() {
            for (dir, neighbor) in cell.neighbors() {
                assert_eq!(neighbor.neighbor(dir.opposite()), Some(cell));
            }
        }
    }

    #[test]
    fn cells_iterate_column_major() {
        let grid = checkered(2);
        let coords: Vec<_> = grid.cells().map(|cell| cell.coords()).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn uniform_color_follows_origin() {
        let mut grid = checkered(2);
        assert!(!grid.all_cells_uniform_color());

        grid.paint((1, 0), A);
        grid.paint((0, 1), A);
        assert!(grid.all_cells_uniform_color());

        grid.paint((0, 0), B);
        assert!(!grid.all_cells_uniform_color());
    }
}
