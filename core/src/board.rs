use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A freshly generated grid together with the palette it was drawn from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    palette: Vec<Color>,
    moves: CellCount,
}

impl Board {
    pub fn new(grid: Grid, palette: Vec<Color>, moves: CellCount) -> Self {
        Self {
            grid,
            palette,
            moves,
        }
    }

    /// Builds a board from palette indices laid out as `rows[row][col]`.
    ///
    /// The move budget follows the usual rule for the layout's side and the
    /// palette length.
    pub fn from_layout(palette: Vec<Color>, rows: &[&[u8]]) -> Result<Self> {
        let colors: ColorCount = palette
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidConfiguration("palette is too large"))?;
        if colors == 0 {
            return Err(GameError::InvalidConfiguration("palette is empty"));
        }

        let side: Coord = rows
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidConfiguration("layout is too large"))?;
        if rows.iter().any(|row| row.len() != rows.len()) {
            return Err(GameError::InvalidConfiguration("layout is not square"));
        }
        if rows.iter().flat_map(|row| row.iter()).any(|&index| index >= colors) {
            return Err(GameError::InvalidConfiguration("layout refers to a missing color"));
        }

        let grid = Grid::build(side, |x, y| {
            palette[usize::from(rows[usize::from(y)][usize::from(x)])]
        })?;
        let moves = mult(side, colors) / 2;
        Ok(Self::new(grid, palette, moves))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Moves granted to the player on this board.
    pub fn moves(&self) -> CellCount {
        self.moves
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_parts(self) -> (Grid, Vec<Color>, CellCount) {
        (self.grid, self.palette, self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const A: Color = Color::new(3, 75, 108);
    const B: Color = Color::new(60, 151, 241);

    #[test]
    fn from_layout_reads_rows_then_columns() {
        let board = Board::from_layout(vec![A, B], &[&[0, 1], &[0, 0]]).unwrap();

        assert_eq!(board.grid()[(1, 0)], B);
        assert_eq!(board.grid()[(0, 1)], A);
        assert_eq!(board.palette(), [A, B]);
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn from_layout_rejects_bad_input() {
        let err = |result: Result<Board>| matches!(result, Err(GameError::InvalidConfiguration(_)));

        assert!(err(Board::from_layout(vec![], &[&[0]])));
        assert!(err(Board::from_layout(vec![A], &[])));
        assert!(err(Board::from_layout(vec![A], &[&[0, 0], &[0]])));
        assert!(err(Board::from_layout(vec![A], &[&[1]])));
    }
}
