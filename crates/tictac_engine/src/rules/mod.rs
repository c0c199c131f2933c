//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here stores a
//! status; callers recompute it from the board whenever they need it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_COMBOS, check_win, winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of a board: win first, then draw, otherwise in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
