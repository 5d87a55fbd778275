use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Connected region reachable from `origin` through neighbors of `match_color`.
///
/// The origin is always the first element, whatever its own color. The order
/// is a depth-first preorder visiting neighbors right, down, up, left, so the
/// same board always yields the same sequence. Every cell appears at most once.
pub fn flood_region<'g>(origin: Cell<'g>, match_color: Color) -> Vec<Cell<'g>> {
    let side = usize::from(origin.grid().side());
    let mut visited = Array2::from_elem((side, side), false);
    let mut region = vec![origin];
    // each frame remembers which of FLOOD_ORDER to try next
    let mut stack = vec![(origin, 0usize)];
    visited[origin.coords().to_nd_index()] = true;

    while let Some((cell, next)) = stack.last_mut() {
        let Some(&dir) = Direction::FLOOD_ORDER.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;

        let Some(neighbor) = cell.neighbor(dir) else {
            continue;
        };
        let seen = &mut visited[neighbor.coords().to_nd_index()];
        if *seen || !neighbor.color().matches(match_color) {
            continue;
        }

        *seen = true;
        log::trace!("flood reached {:?} from {:?}", neighbor.coords(), cell.coords());
        region.push(neighbor);
        stack.push((neighbor, 0));
    }

    region
}

impl Grid {
    /// Runs [`flood_region`] from `coords`, which must be a board position.
    pub fn flood_region(&self, coords: Coord2, match_color: Color) -> Result<Vec<Cell<'_>>> {
        let origin = self
            .cell_at(coords)
            .map_err(|_| GameError::InvalidFloodTarget)?;
        Ok(flood_region(origin, match_color))
    }
}
