use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid needs at least one dimension and every size must be positive")]
    InvalidDimensions,
    #[error("Total cell count overflows the addressable range")]
    TooManyCells,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
