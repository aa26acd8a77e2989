//! Error types for board parsing and game play.

use thiserror::Error;

use crate::{Position, Side};

/// Errors raised by the board and game driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Square notation could not be parsed
    #[error("Invalid position: {notation:?} (expected a1..h8)")]
    InvalidPosition { notation: String },

    /// Board text could not be parsed
    #[error("Invalid board at line {line}: {reason}")]
    InvalidBoard { line: usize, reason: String },

    /// Placement does not flank any opponent piece, or the square is taken
    #[error("Illegal move for {side:?} at {position}")]
    IllegalMove { side: Side, position: Position },

    /// Pass requested while a legal move exists
    #[error("{side:?} cannot pass while legal moves remain")]
    CannotPass { side: Side },

    /// Game already finished
    #[error("Game is over")]
    GameOver,
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
