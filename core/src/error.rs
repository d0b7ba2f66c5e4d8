use thiserror::Error;

/// All validity enforcement happens at construction time; gameplay
/// operations are total and never fail.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
