//! Property tests over random legal games.

use proptest::prelude::*;
use tictac_engine::invariants::{GameInvariants, InvariantSet};
use tictac_engine::rules::{WIN_COMBOS, check_win, is_draw};
use tictac_engine::{Board, GameState, GameStatus, MatchConfig, Player, Square};

/// Plays `choices` as indices into the empty squares until the game ends.
fn play_out(choices: &[usize]) -> GameState {
    let mut game = GameState::new();
    game.reset(MatchConfig::TwoPlayer);
    for choice in choices {
        if !game.is_active() {
            break;
        }
        let empty = game.board().empty_indices();
        let index = empty[choice % empty.len()];
        game.select_cell(index).expect("empty square is legal");

        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        assert!(x.abs_diff(o) <= 1);
        assert!(GameInvariants::check_all(&game).is_ok());
    }
    game
}

fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, 9).prop_map(|cells| {
        let mut board = Board::new();
        for (pos, cell) in cells.into_iter().enumerate() {
            let square = match cell {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            board.set(pos, square);
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_marks_stay_balanced(choices in prop::collection::vec(0usize..9, 0..12)) {
        let game = play_out(&choices);
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn prop_draw_and_win_exclusive(choices in prop::collection::vec(0usize..9, 0..12)) {
        let game = play_out(&choices);
        if game.is_draw() {
            prop_assert!(!game.check_win(Player::X));
            prop_assert!(!game.check_win(Player::O));
        }
        if !game.is_active() {
            prop_assert!(game.status() != GameStatus::InProgress);
            prop_assert_eq!(game.scores().games(), 1);
        }
    }

    #[test]
    fn prop_check_win_matches_combos(board in arbitrary_board()) {
        for player in [Player::X, Player::O] {
            let expected = WIN_COMBOS
                .iter()
                .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(player))));
            prop_assert_eq!(check_win(&board, player), expected);
            if board.count(player) < 3 {
                prop_assert!(!check_win(&board, player));
            }
        }
        if is_draw(&board) {
            prop_assert!(!check_win(&board, Player::X) && !check_win(&board, Player::O));
        }
    }
}
