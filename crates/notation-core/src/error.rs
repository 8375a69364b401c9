//! Notation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Coordinate move is missing tokens or names a square off the board.
    /// Callers are expected to fall back to showing the raw coordinate move.
    #[error("Malformed move: {0}")]
    MalformedMove(String),

    /// Raised once, when a notation style identifier is resolved.
    #[error("Unsupported notation style: {0}")]
    UnsupportedNotationStyle(String),
}
