use thiserror::Error;

use crate::{CardStatus, CardValue, CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Configuration(ConfigIssue),
    #[error("Card at {card:?} cannot go from {from:?} to {to:?}")]
    InvalidTransition {
        card: Coord2,
        from: CardStatus,
        to: CardStatus,
    },
    #[error("Card coordinates out of range")]
    OutOfRange,
    #[error("Turn state is inconsistent: {0}")]
    InternalInconsistency(&'static str),
    #[error("Round already ended, no new moves are accepted")]
    AlreadyEnded,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board has no cells")]
    EmptyBoard,
    #[error("board has an odd number of cells ({0})")]
    OddCellCount(CellCount),
    #[error("{pairs} pairs requested but only {alphabet} distinct values exist")]
    AlphabetExhausted { pairs: CellCount, alphabet: CardValue },
    #[error("value layout does not hold every value exactly twice")]
    UnpairedValues,
    #[error("value layout does not match the board size")]
    ShapeMismatch,
    #[error("round length must be positive")]
    ZeroRoundLength,
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        Self::Configuration(issue)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
