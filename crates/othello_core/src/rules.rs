//! Collaborator interfaces consumed by the search engine, plus the standard
//! Othello implementation of them.
//!
//! The engine only ever talks to a board through these two traits, so any
//! board representation (or a scripted game tree in tests) can be searched.

use crate::{Board, Move, Side};

/// Produces the legal moves for a side.
pub trait MoveGenerator<B> {
    /// Legal moves for `side` in a stable order; empty when the side must
    /// pass. Ranks are unset.
    fn generate_moves(&self, side: Side, board: &B) -> Vec<Move>;
}

/// Applies moves and counts material.
pub trait BoardMutator<B> {
    /// Board after `side` plays `mv`. Must not alias or modify `board`.
    fn apply_move(&self, side: Side, mv: &Move, board: &B) -> B;

    fn count_pieces(&self, board: &B, side: Side) -> i32;
}

/// Standard Othello rules on [`Board`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl MoveGenerator<Board> for StandardRules {
    fn generate_moves(&self, side: Side, board: &Board) -> Vec<Move> {
        board.legal_moves(side).into_iter().map(Move::new).collect()
    }
}

impl BoardMutator<Board> for StandardRules {
    fn apply_move(&self, side: Side, mv: &Move, board: &Board) -> Board {
        match mv.position {
            Some(position) => board.with_piece(side, position),
            None => *board,
        }
    }

    fn count_pieces(&self, board: &Board, side: Side) -> i32 {
        board.count(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_generate_moves_unranked_in_row_major_order() {
        let moves = StandardRules.generate_moves(Side::Dark, &Board::initial());
        let squares: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(squares, vec!["d3", "c4", "f5", "e6"]);
        assert!(moves.iter().all(|m| m.rank == 0 && !m.is_pass()));
    }

    #[test]
    fn test_apply_move_is_non_destructive() {
        let board = Board::initial();
        let mv = Move::new(Position::from_algebraic("f5").unwrap());
        let next = StandardRules.apply_move(Side::Dark, &mv, &board);

        assert_eq!(board, Board::initial());
        assert_eq!(StandardRules.count_pieces(&next, Side::Dark), 4);
        assert_eq!(StandardRules.count_pieces(&next, Side::Light), 1);
    }

    #[test]
    fn test_apply_pass_returns_same_board() {
        let board = Board::initial();
        assert_eq!(StandardRules.apply_move(Side::Light, &Move::pass(), &board), board);
    }
}
