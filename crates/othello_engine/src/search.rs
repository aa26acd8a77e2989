//! Depth-limited minimax with alpha-beta pruning.
//!
//! Light maximizes and Dark minimizes. The bounds keep the engine's historical
//! naming: `alpha` is the ceiling enforced on Light (tightened by Dark nodes)
//! and `beta` is the floor enforced on Dark (raised by Light nodes). Both are
//! passed by value, so sibling subtrees only ever see bounds tightened by
//! their ancestors and earlier siblings.

use log::{debug, trace};
use othello_core::{BoardMutator, Move, MoveGenerator, Side};

use crate::error::{EngineError, EngineResult};
use crate::evaluation::{heuristic_rank, is_decided, material_score, terminal_rank, MAX_RANK};
use crate::SearchConfig;

/// Counters collected over one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,   // Calls into the recursive search, pass nodes included
    pub leaves: u64,  // Positions scored without further lookahead
    pub cutoffs: u64, // Early returns caused by the alpha-beta bounds
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best: Move,
    pub stats: SearchStats,
}

/// Minimax searcher over any board type the collaborators understand.
#[derive(Debug, Clone)]
pub struct SearchEngine<R> {
    rules: R,
    config: SearchConfig,
    pruning: bool,
}

impl<R> SearchEngine<R> {
    pub fn new(rules: R, config: SearchConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            pruning: true,
        })
    }

    /// Engine that visits every node. Selects a move of the same rank as the
    /// pruned search, only slower.
    pub fn full_width(rules: R, config: SearchConfig) -> EngineResult<Self> {
        let mut engine = Self::new(rules, config)?;
        engine.pruning = false;
        Ok(engine)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Widest bounds, used to seed a search from the root.
    pub fn initial_bounds() -> (i32, i32) {
        let alpha = MAX_RANK + 64;
        (alpha, -alpha)
    }

    /// Search from the root with fresh bounds. Fails when `side` has nothing
    /// to play; the caller is expected to pass the turn instead.
    pub fn best_move<B>(&self, board: &B, side: Side) -> EngineResult<SearchOutcome>
    where
        R: MoveGenerator<B> + BoardMutator<B>,
    {
        if self.rules.generate_moves(side, board).is_empty() {
            return Err(EngineError::NoLegalMoves { side });
        }

        let (alpha, beta) = Self::initial_bounds();
        let mut stats = SearchStats::default();
        let best = self.search(board, side, 1, alpha, beta, &mut stats);

        debug!(
            "{:?} best move {} rank {} ({} nodes, {} leaves, {} cutoffs)",
            side, best, best.rank, stats.nodes, stats.leaves, stats.cutoffs
        );

        Ok(SearchOutcome { best, stats })
    }

    /// Best move for `side` at a node `depth` plies below the root, searched
    /// within the given bounds. A side without legal moves gets a ranked pass.
    pub fn find_best_move<B>(&self, board: &B, side: Side, depth: u32, alpha: i32, beta: i32) -> Move
    where
        R: MoveGenerator<B> + BoardMutator<B>,
    {
        let mut stats = SearchStats::default();
        self.search(board, side, depth, alpha, beta, &mut stats)
    }

    fn search<B>(
        &self,
        board: &B,
        side: Side,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Move
    where
        R: MoveGenerator<B> + BoardMutator<B>,
    {
        stats.nodes += 1;

        let moves = self.rules.generate_moves(side, board);
        if moves.is_empty() {
            return self.pass_node(board, side, depth, alpha, beta, stats);
        }

        let opponent = side.opponent();
        let own_moves = moves.len();
        let mut best: Option<Move> = None;

        // End-game scores use the material before the move, not after it.
        let score = material_score(&self.rules, board);

        for mut candidate in moves {
            let next = self.rules.apply_move(side, &candidate, board);

            let mut forfeit = 0;
            let mut end_game = false;
            let opponent_moves = self.rules.generate_moves(opponent, &next).len();
            if opponent_moves == 0 {
                forfeit = side.sign();
                end_game = self.rules.generate_moves(side, &next).is_empty();
            }

            if end_game || depth >= self.config.max_depth {
                stats.leaves += 1;
                candidate.rank = if end_game {
                    terminal_rank(score)
                } else {
                    heuristic_rank(&self.config, side, forfeit, own_moves, opponent_moves)
                };
            } else {
                // The child's rank is credited with the forfeit bonus, so its
                // bounds are moved into the child's frame first.
                let bonus = self.config.forfeit_weight * forfeit;
                let reply = self.search(
                    &next,
                    opponent,
                    depth + 1,
                    shift_bound(alpha, bonus),
                    shift_bound(beta, bonus),
                    stats,
                );
                candidate.rank = reply.rank;

                // Forfeits accumulate up the tree until the game is decided.
                if forfeit != 0 && !is_decided(candidate.rank) {
                    candidate.rank += bonus;
                }

                if self.pruning {
                    match side {
                        Side::Light if candidate.rank > beta => beta = candidate.rank,
                        Side::Dark if candidate.rank < alpha => alpha = candidate.rank,
                        _ => {}
                    }
                }
            }

            if self.pruning {
                let bound = match side {
                    Side::Light if candidate.rank > alpha => Some(alpha),
                    Side::Dark if candidate.rank < beta => Some(beta),
                    _ => None,
                };
                if let Some(bound) = bound {
                    stats.cutoffs += 1;
                    trace!(
                        "cutoff at depth {} on {} ({:?} rank {} clamped to {})",
                        depth, candidate, side, candidate.rank, bound
                    );
                    return candidate.with_rank(bound);
                }
            }

            best = match best {
                Some(current) if side.sign() * candidate.rank <= side.sign() * current.rank => Some(current),
                _ => Some(candidate),
            };
        }

        best.unwrap_or_else(Move::pass)
    }

    // The side to move is stuck: the turn goes back to the other side, or the
    // game ends when neither can move.
    fn pass_node<B>(
        &self,
        board: &B,
        side: Side,
        depth: u32,
        alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> Move
    where
        R: MoveGenerator<B> + BoardMutator<B>,
    {
        let other = side.opponent();
        let other_moves = self.rules.generate_moves(other, board).len();

        let rank = if other_moves == 0 {
            stats.leaves += 1;
            terminal_rank(material_score(&self.rules, board))
        } else if depth >= self.config.max_depth {
            stats.leaves += 1;
            heuristic_rank(&self.config, side, 0, 0, other_moves)
        } else {
            self.search(board, other, depth + 1, alpha, beta, stats).rank
        };

        Move::pass().with_rank(rank)
    }
}

// Sentinel-sized bounds stay put, matching decided ranks that never take a bonus.
fn shift_bound(bound: i32, bonus: i32) -> i32 {
    if is_decided(bound) {
        bound
    } else {
        bound.saturating_sub(bonus)
    }
}

impl<R: Default> Default for SearchEngine<R> {
    fn default() -> Self {
        Self {
            rules: R::default(),
            config: SearchConfig::default(),
            pruning: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Position;
    use std::collections::HashMap;

    /// Hand-built game tree. Boards are node ids; a move at column `i` leads
    /// to the i-th child listed for the side to move. Nodes carry no discs.
    #[derive(Default)]
    struct TreeRules {
        children: HashMap<(u8, Side), Vec<u8>>,
    }

    impl TreeRules {
        fn edge(mut self, from: u8, side: Side, to: &[u8]) -> Self {
            self.children.insert((from, side), to.to_vec());
            self
        }
    }

    impl MoveGenerator<u8> for TreeRules {
        fn generate_moves(&self, side: Side, board: &u8) -> Vec<Move> {
            let count = self.children.get(&(*board, side)).map_or(0, Vec::len);
            (0..count as u8)
                .filter_map(|col| Position::new(0, col))
                .map(Move::new)
                .collect()
        }
    }

    impl BoardMutator<u8> for TreeRules {
        fn apply_move(&self, side: Side, mv: &Move, board: &u8) -> u8 {
            match (mv.position, self.children.get(&(*board, side))) {
                (Some(pos), Some(children)) => children[pos.col as usize],
                _ => *board,
            }
        }

        fn count_pieces(&self, _board: &u8, _side: Side) -> i32 {
            0
        }
    }

    fn engine(rules: TreeRules, max_depth: u32) -> SearchEngine<TreeRules> {
        SearchEngine::new(rules, SearchConfig::new(max_depth)).unwrap()
    }

    #[test]
    fn test_two_consecutive_forfeits_accumulate() {
        // Light moves 0 -> 1 -> 2 with Dark stuck after each, then play resumes
        // normally and the line ends in a level heuristic leaf.
        let rules = TreeRules::default()
            .edge(0, Side::Light, &[1])
            .edge(1, Side::Light, &[2])
            .edge(2, Side::Light, &[3])
            .edge(3, Side::Dark, &[4])
            .edge(4, Side::Light, &[5]);

        let engine = engine(rules, 6);
        let outcome = engine.best_move(&0u8, Side::Light).unwrap();

        assert_eq!(outcome.best.rank, 2 * 35);
        assert_eq!(outcome.best.position, Position::new(0, 0));
    }

    #[test]
    fn test_pass_node_at_depth_limit_scores_mobility() {
        // Dark is stuck on node 1 and the search has no depth left.
        let rules = TreeRules::default()
            .edge(0, Side::Light, &[1])
            .edge(1, Side::Light, &[2, 3]);
        let engine = engine(rules, 2);

        let pass = engine.find_best_move(&1u8, Side::Dark, 2, 0, 0);
        assert!(pass.is_pass());
        // Dark has no moves against Light's two: -1 * 5 * (0 - 2)
        assert_eq!(pass.rank, 10);
    }

    #[test]
    fn test_pass_node_without_replies_is_terminal() {
        let engine = engine(TreeRules::default(), 6);
        let (alpha, beta) = SearchEngine::<TreeRules>::initial_bounds();

        let pass = engine.find_best_move(&7u8, Side::Light, 1, alpha, beta);
        assert!(pass.is_pass());
        assert_eq!(pass.rank, 0);
    }

    #[test]
    fn test_no_legal_moves_at_root_is_an_error() {
        let engine = engine(TreeRules::default(), 6);
        assert_eq!(
            engine.best_move(&0u8, Side::Dark).unwrap_err(),
            EngineError::NoLegalMoves { side: Side::Dark }
        );
    }

    #[test]
    fn test_light_cutoff_clamps_to_alpha() {
        // Light's first move leaves Dark one reply: 5 * (2 - 1) = 5, which
        // exceeds the ceiling of 3. The second move ends the game level.
        let rules = TreeRules::default()
            .edge(0, Side::Light, &[1, 2])
            .edge(1, Side::Dark, &[3]);
        let engine = engine(rules, 1);

        let mv = engine.find_best_move(&0u8, Side::Light, 1, 3, -100);
        assert_eq!(mv.rank, 3);
        assert_eq!(mv.position, Position::new(0, 0));

        let full = SearchEngine::full_width(engine.rules, SearchConfig::new(1)).unwrap();
        let mv = full.find_best_move(&0u8, Side::Light, 1, 3, -100);
        assert!(mv.rank > 3);
    }

    #[test]
    fn test_floor_is_shifted_below_a_forfeit() {
        // Light's only move leaves Dark stuck. After the pass Light plays on
        // and Dark's reply scores 5 * (3 - 1) = 10, so the move ranks 10 + 35.
        // The inherited floor of 20 must not clamp Dark's reply.
        let rules = TreeRules::default()
            .edge(0, Side::Light, &[1])
            .edge(1, Side::Light, &[2])
            .edge(2, Side::Dark, &[3])
            .edge(3, Side::Light, &[4, 5, 6]);
        let engine = engine(rules, 4);

        let mv = engine.find_best_move(&0u8, Side::Light, 1, i32::MAX, 20);
        assert_eq!(mv.rank, 45);

        let full = SearchEngine::full_width(engine.rules, SearchConfig::new(4)).unwrap();
        let mv = full.find_best_move(&0u8, Side::Light, 1, i32::MAX, 20);
        assert_eq!(mv.rank, 45);
    }

    #[test]
    fn test_sentinel_bounds_are_not_shifted() {
        assert_eq!(shift_bound(i32::MAX, 35), i32::MAX);
        assert_eq!(shift_bound(-i32::MAX, -35), -i32::MAX);
        assert_eq!(shift_bound(20, 35), -15);
        assert_eq!(shift_bound(20, -35), 55);
    }

    #[test]
    fn test_initial_bounds_are_symmetric_and_widest() {
        let (alpha, beta) = SearchEngine::<TreeRules>::initial_bounds();
        assert_eq!(alpha, i32::MAX);
        assert_eq!(beta, -i32::MAX);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            SearchEngine::new(TreeRules::default(), SearchConfig::new(0)),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
