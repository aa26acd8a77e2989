//! Integration tests for the game driver: full games played through the
//! public API must always terminate with every square accounted for.

use othello_core::{Board, Game, Position, Side};
use proptest::prelude::*;

fn play_out(choices: &[usize]) -> Game {
    let mut game = Game::new();
    let mut turn = 0;
    while !game.is_over() {
        if game.must_pass() {
            game.pass().unwrap();
            continue;
        }
        let moves = game.legal_moves();
        let choice = choices.get(turn).copied().unwrap_or(0);
        game.play(moves[choice % moves.len()]).unwrap();
        turn += 1;
    }
    game
}

#[test]
fn test_first_move_game_completes() {
    let game = play_out(&[]);
    let (dark, light) = game.score();

    assert!(game.is_over());
    assert!(dark + light <= 64);
    assert!(game.history().len() >= 60 - game.board().empty_count() as usize);
}

#[test]
fn test_standard_opening_sequence() {
    let mut game = Game::new();
    for notation in ["f5", "d6", "c3", "d3", "c4"] {
        game.play(Position::from_algebraic(notation).unwrap()).unwrap();
    }

    assert_eq!(game.current_turn(), Side::Light);
    assert_eq!(game.board().empty_count(), 55);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_game_from_parsed_board() {
    let board: Board = "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . O X . . .
        . . . X O . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    "
    .parse()
    .unwrap();

    let game = Game::from_position(board, Side::Dark);
    assert_eq!(game.board(), &Board::initial());
    assert_eq!(game.legal_moves().len(), 4);
}

proptest! {
    #[test]
    fn prop_every_game_terminates_consistently(choices in prop::collection::vec(0usize..64, 0..64)) {
        let game = play_out(&choices);
        let (dark, light) = game.score();

        prop_assert!(game.is_over());
        prop_assert!(!game.board().has_legal_move(Side::Dark));
        prop_assert!(!game.board().has_legal_move(Side::Light));
        prop_assert_eq!(dark + light + game.board().empty_count(), 64);

        match game.winner() {
            Some(Side::Dark) => prop_assert!(dark > light),
            Some(Side::Light) => prop_assert!(light > dark),
            None => prop_assert_eq!(dark, light),
        }
    }
}
