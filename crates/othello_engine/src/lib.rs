pub mod ai;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod search;

pub use ai::{MinimaxAI, OthelloAI, RandomAI};
pub use config::SearchConfig;
pub use error::{EngineError, EngineResult};
pub use evaluation::{heuristic_rank, material_score, terminal_rank, MAX_RANK};
pub use search::{SearchEngine, SearchOutcome, SearchStats};
