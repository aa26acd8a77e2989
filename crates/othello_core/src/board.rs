use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::{Cell, Position, Side};

pub const BOARD_SIZE: usize = 8;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// An 8x8 Othello grid. Boards are plain values: every move produces a new
/// board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position:
    /// - d4 and e5 are Light
    /// - e4 and d5 are Dark
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Light;
        board.cells[3][4] = Cell::Dark;
        board.cells[4][3] = Cell::Dark;
        board.cells[4][4] = Cell::Light;
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    pub fn count(&self, side: Side) -> i32 {
        let target = side.to_cell();
        self.cells.iter().flatten().filter(|&&cell| cell == target).count() as i32
    }

    pub fn empty_count(&self) -> i32 {
        self.cells.iter().flatten().filter(|&&cell| cell == Cell::Empty).count() as i32
    }

    /// The same position with every piece's color swapped.
    pub fn mirrored(&self) -> Self {
        let mut board = *self;
        for cell in board.cells.iter_mut().flatten() {
            *cell = cell.flipped();
        }
        board
    }

    /// Check if `side` may place a piece at `pos`:
    /// 1. The square is on the board and empty
    /// 2. The placement flanks at least one line of opponent pieces
    pub fn is_legal(&self, side: Side, pos: Position) -> bool {
        Position::new(pos.row, pos.col).is_some()
            && self.get(pos) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.flips_in_direction(side, pos, dr, dc) > 0)
    }

    /// Legal placements for `side` in row-major order (a1, b1, ..., h8).
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(side, pos)).collect()
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        Position::all().any(|pos| self.is_legal(side, pos))
    }

    /// Place a piece for `side` and return the resulting board.
    pub fn place(&self, side: Side, pos: Position) -> CoreResult<Board> {
        if !self.is_legal(side, pos) {
            return Err(CoreError::IllegalMove { side, position: pos });
        }
        Ok(self.with_piece(side, pos))
    }

    /// Place a piece and flip every flanked line without checking legality.
    pub fn with_piece(&self, side: Side, pos: Position) -> Board {
        let mut next = *self;
        let player = side.to_cell();

        for (dr, dc) in DIRECTIONS {
            let flips = self.flips_in_direction(side, pos, dr, dc);
            let mut current = pos;
            for _ in 0..flips {
                // flips_in_direction only counts squares that exist
                match current.offset(dr, dc) {
                    Some(next_pos) => {
                        next.set(next_pos, player);
                        current = next_pos;
                    }
                    None => break,
                }
            }
        }

        next.set(pos, player);
        next
    }

    /// Number of opponent pieces that a placement at `pos` would flip in
    /// direction (dr, dc). Zero unless the run is closed by one of our pieces.
    fn flips_in_direction(&self, side: Side, pos: Position, dr: i8, dc: i8) -> usize {
        let opponent = side.opponent().to_cell();
        let player = side.to_cell();

        let mut count = 0;
        let mut current = pos.offset(dr, dc);
        while let Some(next) = current {
            match self.get(next) {
                cell if cell == opponent => {
                    count += 1;
                    current = next.offset(dr, dc);
                }
                cell if cell == player => return count,
                _ => return 0,
            }
        }

        0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses eight lines of eight symbols (`.` empty, `X` Dark, `O` Light).
/// Whitespace inside a line is ignored; blank lines are skipped.
impl FromStr for Board {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut row = 0;

        for (line_no, line) in s.lines().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.is_empty() {
                continue;
            }
            if row >= BOARD_SIZE {
                return Err(CoreError::InvalidBoard {
                    line: line_no + 1,
                    reason: "more than 8 rows".to_string(),
                });
            }
            if symbols.len() != BOARD_SIZE {
                return Err(CoreError::InvalidBoard {
                    line: line_no + 1,
                    reason: format!("expected 8 squares, found {}", symbols.len()),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| CoreError::InvalidBoard {
                    line: line_no + 1,
                    reason: format!("unknown square {:?}", symbol),
                })?;
                board.cells[row][col] = cell;
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(CoreError::InvalidBoard {
                line: s.lines().count(),
                reason: format!("expected 8 rows, found {}", row),
            });
        }

        Ok(board)
    }
}
