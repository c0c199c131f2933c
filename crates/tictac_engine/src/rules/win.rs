//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning index triples.
pub const WIN_COMBOS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff some winning line is held entirely by `player`.
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WIN_COMBOS
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(mark)))
}

/// Returns the player holding a complete line, if any.
///
/// X is checked first; under alternating play at most one player can hold a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| check_win(board, player))
}
