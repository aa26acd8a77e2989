use log::debug;
use othello_core::{Board, Move, Position, Side, StandardRules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EngineResult;
use crate::search::{SearchEngine, SearchStats};
use crate::SearchConfig;

/// A player that picks placements for a side.
pub trait OthelloAI {
    fn name(&self) -> &str;

    /// Square to play, or None when `side` has to pass.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Position>;
}

/// Minimax player backed by the alpha-beta search.
#[derive(Debug, Clone)]
pub struct MinimaxAI {
    engine: SearchEngine<StandardRules>,
    last_stats: Option<SearchStats>,
}

impl MinimaxAI {
    pub fn new(config: SearchConfig) -> EngineResult<Self> {
        Ok(MinimaxAI {
            engine: SearchEngine::new(StandardRules, config)?,
            last_stats: None,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        self.engine.config()
    }

    /// Ranked best move; errors when `side` has no legal move.
    pub fn best_move(&mut self, board: &Board, side: Side) -> EngineResult<Move> {
        let outcome = self.engine.best_move(board, side)?;
        self.last_stats = Some(outcome.stats);
        Ok(outcome.best)
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }
}

impl Default for MinimaxAI {
    fn default() -> Self {
        MinimaxAI {
            engine: SearchEngine::default(),
            last_stats: None,
        }
    }
}

impl OthelloAI for MinimaxAI {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        match self.best_move(board, side) {
            Ok(mv) => mv.position,
            Err(err) => {
                debug!("{}: {}", self.name(), err);
                None
            }
        }
    }
}

/// Plays a uniformly random legal move. Seeded, so games are reproducible.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        RandomAI {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OthelloAI for RandomAI {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        board.legal_moves(side).choose(&mut self.rng).copied()
    }
}
