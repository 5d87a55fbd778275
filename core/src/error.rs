use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Flood cannot start outside the board")]
    InvalidFloodTarget,
}

pub type Result<T> = core::result::Result<T, GameError>;
