use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of boards for new games and resets.
pub trait BoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board>;
}
