#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use color::*;
pub use engine::*;
pub use error::*;
pub use flood::*;
pub use generator::*;
pub use grid::*;
pub use types::*;
pub use view::*;

mod board;
mod color;
mod engine;
mod error;
mod flood;
mod generator;
mod grid;
mod types;
mod view;

/// Construction-time parameters of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per board side.
    pub size: Coord,
    /// Number of palette colors.
    pub colors: ColorCount,
    /// Ticks delivered per second of elapsed time.
    pub fps: u16,
    /// Side of a cell in the host's logical drawing units.
    pub cell_size: u16,
}

impl GameConfig {
    pub const DEFAULT_CELL_SIZE: u16 = 40;

    pub const fn new_unchecked(size: Coord, colors: ColorCount, fps: u16, cell_size: u16) -> Self {
        Self {
            size,
            colors,
            fps,
            cell_size,
        }
    }

    pub fn new(size: Coord, colors: ColorCount, fps: u16) -> Result<Self> {
        Self::new_unchecked(size, colors, fps, Self::DEFAULT_CELL_SIZE).validated()
    }

    pub fn with_cell_size(self, cell_size: u16) -> Result<Self> {
        Self { cell_size, ..self }.validated()
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 1 {
            return Err(GameError::InvalidConfiguration("board size must be at least 1"));
        }
        if self.colors < 1 {
            return Err(GameError::InvalidConfiguration("at least one color is required"));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfiguration("tick rate must be positive"));
        }
        if self.cell_size < 2 {
            return Err(GameError::InvalidConfiguration("cell size must be at least 2"));
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Moves granted for a fresh board, `size * colors / 2` rounded down.
    pub const fn move_budget(&self) -> CellCount {
        mult(self.size, self.colors) / 2
    }

    /// Elapsed seconds added by every tick.
    pub fn tick_seconds(&self) -> f64 {
        1.0 / f64::from(self.fps)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 4, 60, Self::DEFAULT_CELL_SIZE)
    }
}
