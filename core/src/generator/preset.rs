use super::*;

/// Hands out the same fixed board every time, for scripted games.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetBoardGenerator {
    board: Board,
}

impl PresetBoardGenerator {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl BoardGenerator for PresetBoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        if self.board.grid().side() != config.size {
            return Err(GameError::InvalidConfiguration(
                "preset board size does not match configuration",
            ));
        }
        if self.board.palette().len() != usize::from(config.colors) {
            return Err(GameError::InvalidConfiguration(
                "preset palette does not match configuration",
            ));
        }

        Ok(self.board.clone())
    }
}
