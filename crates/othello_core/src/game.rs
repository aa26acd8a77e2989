use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::{Board, Move, Position, Side};

/// A game in progress: the board plus turn order, pass bookkeeping and the
/// list of moves played so far.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Side,
    history: Vec<Move>,
    game_over: bool,
}

impl Game {
    /// Standard start with Dark to move.
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Side::Dark)
    }

    pub fn from_position(board: Board, to_move: Side) -> Self {
        let mut game = Self {
            board,
            current_turn: to_move,
            history: Vec::new(),
            game_over: false,
        };
        game.update_game_over();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_turn)
    }

    /// True when the side to move has nothing to play but the game goes on.
    pub fn must_pass(&self) -> bool {
        !self.game_over && !self.board.has_legal_move(self.current_turn)
    }

    pub fn play(&mut self, position: Position) -> CoreResult<()> {
        if self.game_over {
            return Err(CoreError::GameOver);
        }

        self.board = self.board.place(self.current_turn, position)?;
        debug!("{:?} plays {}", self.current_turn, position);

        self.history.push(Move::new(position));
        self.current_turn = self.current_turn.opponent();
        self.update_game_over();
        Ok(())
    }

    pub fn pass(&mut self) -> CoreResult<()> {
        if self.game_over {
            return Err(CoreError::GameOver);
        }
        if self.board.has_legal_move(self.current_turn) {
            return Err(CoreError::CannotPass { side: self.current_turn });
        }

        debug!("{:?} passes", self.current_turn);
        self.history.push(Move::pass());
        self.current_turn = self.current_turn.opponent();
        self.update_game_over();
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Piece counts as (dark, light).
    pub fn score(&self) -> (i32, i32) {
        (self.board.count(Side::Dark), self.board.count(Side::Light))
    }

    /// Winner once the game is over; None while playing or on a draw.
    pub fn winner(&self) -> Option<Side> {
        if !self.game_over {
            return None;
        }

        let (dark, light) = self.score();
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Some(Side::Dark),
            std::cmp::Ordering::Less => Some(Side::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    // The game ends when neither side can place a piece.
    fn update_game_over(&mut self) {
        self.game_over = !self.board.has_legal_move(self.current_turn)
            && !self.board.has_legal_move(self.current_turn.opponent());
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
