// Core Othello game logic modules
pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod position;
pub mod rules;
pub mod side;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE};
pub use error::{CoreError, CoreResult};
pub use game::Game;
pub use moves::Move;
pub use position::Position;
pub use rules::{BoardMutator, MoveGenerator, StandardRules};
pub use side::{Cell, Side};
