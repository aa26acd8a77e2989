use crate::error::{EngineError, EngineResult};

// Search parameters
pub const DEFAULT_MAX_DEPTH: u32 = 6;     // Plies of lookahead, root is depth 1
pub const DEFAULT_FORFEIT_WEIGHT: i32 = 35; // Bonus per forced opponent pass
pub const DEFAULT_MOBILITY_WEIGHT: i32 = 5; // Per move of mobility advantage

const MAX_SUPPORTED_DEPTH: u32 = 60; // No game lasts longer than the empty squares

/// Tunables captured by the engine at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u32,
    pub forfeit_weight: i32,
    pub mobility_weight: i32,
}

impl SearchConfig {
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_forfeit_weight(mut self, weight: i32) -> Self {
        self.forfeit_weight = weight;
        self
    }

    pub fn with_mobility_weight(mut self, weight: i32) -> Self {
        self.mobility_weight = weight;
        self
    }

    /// Weights must stay small enough that heuristic ranks never approach the
    /// end-game sentinel.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "max_depth must be between 1 and {}, got {}",
                    MAX_SUPPORTED_DEPTH, self.max_depth
                ),
            });
        }

        for (name, weight) in [
            ("forfeit_weight", self.forfeit_weight),
            ("mobility_weight", self.mobility_weight),
        ] {
            if !(0..=1_000_000).contains(&weight) {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} must be between 0 and 1000000, got {}", name, weight),
                });
            }
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            forfeit_weight: DEFAULT_FORFEIT_WEIGHT,
            mobility_weight: DEFAULT_MOBILITY_WEIGHT,
        }
    }
}
