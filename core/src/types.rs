use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side and cell positions.
pub type Coord = u8;

/// Count type used for cell totals and move budgets.
pub type CellCount = u16;

/// Count type used for palette sizes.
pub type ColorCount = u8;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Orthogonal directions, columns grow to the right and rows grow downwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Order in which the flood search visits neighbors.
    pub const FLOOD_ORDER: [Direction; 4] = [Self::Right, Self::Down, Self::Up, Self::Left];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Steps from `coords` in this direction, `None` when that leaves the board.
    pub fn step(self, coords: Coord2, side: Coord) -> Option<Coord2> {
        apply_delta(coords, self.delta(), side)
    }
}

fn apply_delta(coords: Coord2, delta: (i8, i8), side: Coord) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= side {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= side {
        return None;
    }

    Some((next_x, next_y))
}

/// A point in the host's logical drawing space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
