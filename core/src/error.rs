use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index is outside the grid")]
    InvalidCell,
    #[error("Cell listed more than once")]
    DuplicateCell,
    #[error("Target set must contain at least one cell")]
    EmptyTarget,
    #[error("Difficulty outside the supported range")]
    InvalidDifficulty,
    #[error("Generated target does not match the requested difficulty")]
    TargetSizeMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
