use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Draws a random palette and paints every cell from it uniformly.
///
/// Each call continues the same random stream, so a generator seeded with the
/// same value always yields the same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    fn random_color(&mut self) -> Color {
        // components stay below 255, as the classic game did
        let r = self.rng.random_range(0..u8::MAX);
        let g = self.rng.random_range(0..u8::MAX);
        let b = self.rng.random_range(0..u8::MAX);
        Color::new(r, g, b)
    }

    fn random_palette(&mut self, colors: ColorCount) -> Vec<Color> {
        let mut palette = Vec::with_capacity(colors.into());
        while palette.len() < usize::from(colors) {
            let color = self.random_color();
            if palette.contains(&color) {
                log::warn!("Drew duplicate palette color {}, drawing again", color);
                continue;
            }
            palette.push(color);
        }
        palette
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        let palette = self.random_palette(config.colors);
        let rng = &mut self.rng;
        let grid = Grid::build(config.size, |_, _| {
            palette[rng.random_range(0..palette.len())]
        })?;
        log::debug!(
            "Generated {0}x{0} board with {1} colors, origin {2}",
            config.size,
            config.colors,
            grid.origin().color()
        );

        Ok(Board::new(grid, palette, config.move_budget()))
    }
}
