use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoordinate,
    #[error("Board size and mine density must leave at least one mine and one safe cell")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
