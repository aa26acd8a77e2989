use std::fmt;

use crate::Position;

/// A candidate placement (or a pass) together with the score the search
/// assigned to it.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub position: Option<Position>,
    pub rank: i32,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Move {}

impl Move {
    pub fn new(position: Position) -> Self {
        Self {
            position: Some(position),
            rank: 0,
        }
    }

    /// The side to move has no legal placement.
    pub fn pass() -> Self {
        Self {
            position: None,
            rank: 0,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.position.is_none()
    }

    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}", position),
            None => write!(f, "pass"),
        }
    }
}
