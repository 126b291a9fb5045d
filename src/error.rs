use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position outside the grid")]
    OutOfRange,
    #[error("Mine count must be less than the cell count")]
    TooManyMines,
    #[error("Layout places a mine at the first revealed position")]
    MineAtFirstReveal,
}

pub type Result<T> = core::result::Result<T, GameError>;
