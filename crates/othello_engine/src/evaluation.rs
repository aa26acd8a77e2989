use othello_core::{BoardMutator, Side};

use crate::SearchConfig;

/// Magnitude reserved for decided games. Leaves 64 units of headroom below
/// `i32::MAX` for the final disc difference.
pub const MAX_RANK: i32 = i32::MAX - 64;

/// Disc difference from Light's point of view (Light - Dark).
pub fn material_score<B, M: BoardMutator<B>>(rules: &M, board: &B) -> i32 {
    rules.count_pieces(board, Side::Light) - rules.count_pieces(board, Side::Dark)
}

/// Rank of a finished game: the sentinel carries the winner, the disc
/// difference orders wins of different margins. Draws rank zero.
pub fn terminal_rank(score: i32) -> i32 {
    match score {
        s if s < 0 => -MAX_RANK + s,
        s if s > 0 => MAX_RANK + s,
        _ => 0,
    }
}

/// Depth-limit rank of an unfinished position reached by `side`.
///
/// `forfeit` is `side.sign()` when the move left the opponent without a reply
/// and zero otherwise. Frontier and stability terms are not scored.
pub fn heuristic_rank(
    config: &SearchConfig,
    side: Side,
    forfeit: i32,
    own_moves: usize,
    opponent_moves: usize,
) -> i32 {
    let mobility = own_moves as i32 - opponent_moves as i32;
    config.forfeit_weight * forfeit + config.mobility_weight * side.sign() * mobility
}

/// True once a rank is inside the decided-game band.
pub fn is_decided(rank: i32) -> bool {
    rank.abs() >= MAX_RANK
}
