//! Full-depth minimax over the tic-tac-toe game tree.
//!
//! No pruning and no memoization: the tree below any position has at most
//! 9! leaves, small enough to walk every time.

use crate::rules::{check_win, is_full};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Score for a computer win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Value of `board` for `computer`, with `maximizing` saying whose ply is next.
///
/// Terminal positions score `WIN_SCORE - depth` when the computer holds a
/// line, `depth - WIN_SCORE` when the human does, and `0` when the board is
/// full. Squares are tried in index order and restored before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, computer: Player) -> i32 {
    let human = computer.opponent();
    if check_win(board, computer) {
        return WIN_SCORE - depth;
    }
    if check_win(board, human) {
        return depth - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    let mover = if maximizing { computer } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in 0..board.squares().len() {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, depth + 1, !maximizing, computer);
        board.set(pos, Square::Empty);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Score of every empty square for `computer`, in index order.
pub fn score_moves(board: &Board, computer: Player) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    board
        .empty_indices()
        .into_iter()
        .map(|pos| {
            scratch.set(pos, Square::Occupied(computer));
            let score = minimax(&mut scratch, 0, false, computer);
            scratch.set(pos, Square::Empty);
            (pos, score)
        })
        .collect()
}

/// The optimal square for `computer`, `None` on a full board.
///
/// Ties go to the lowest index.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn best_move(board: &Board, computer: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (pos, score) in score_moves(board, computer) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    debug!(?best, "Minimax search complete");
    best.map(|(pos, _)| pos)
}
