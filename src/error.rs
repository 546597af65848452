//! Error types for the board, the turn loop, and configuration.

use crate::board::Point;

/// Errors raised by [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board size {size} (must be at least {min})")]
    InvalidSize { size: usize, min: usize },

    #[error("point {point} is outside a {size}x{size} board")]
    OutOfBounds { point: Point, size: usize },

    #[error("malformed board row {row}: {line:?}")]
    MalformedRow { row: usize, line: String },

    #[error("illegal move: point {0} is not empty")]
    Occupied(Point),

    #[error("capture set is stale: point {0} is empty and cannot be flipped")]
    EmptyCellFlip(Point),
}

/// Errors raised while advancing a [`Game`](crate::game::Game).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("illegal move attempt at {point} after {attempts} tries")]
    IllegalMove { point: Point, attempts: usize },

    #[error("board desynchronized from move generator: {0}")]
    Board(#[from] BoardError),

    #[error("move provider failed: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("game is already over")]
    Finished,
}

/// Errors raised when validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("board size {size} is too large to display (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("player count must be 1 or 2 (got {0})")]
    Players(u8),
}
