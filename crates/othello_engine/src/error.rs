//! Error types for the search engine

use othello_core::Side;
use thiserror::Error;

/// Errors reported by the engine's top-level entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The side to move has nothing to play; the caller must pass instead
    #[error("{side:?} has no legal moves")]
    NoLegalMoves { side: Side },

    /// Search parameters out of range
    #[error("Invalid search configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
