//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board where nobody holds a line.
///
/// The win check runs first so a final winning move is never reported as a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_pattern("XO.OX....").unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_pattern("XOXOXXOXO").unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / O X O
        let board = Board::from_pattern("XXXOOXOXO").unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
