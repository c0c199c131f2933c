//! Computer opponent.
//!
//! Picks a square for the computer according to a [`Difficulty`]: random
//! for easy, optimal for hard, and a fresh coin flip between the two on
//! every medium move.

pub mod minimax;

pub use minimax::best_move;

use crate::config::Difficulty;
use crate::types::{Board, Player};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Probability that a medium move is random rather than optimal.
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

/// Computer player with its own random source.
#[derive(Debug, Clone)]
pub struct Opponent {
    rng: ChaCha8Rng,
}

impl Opponent {
    /// Creates an opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates an opponent whose random choices are reproducible.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picks a square for `computer` against `human`.
    ///
    /// Returns `None` when the board has no empty square.
    #[instrument(skip(self, board), fields(filled = board.filled()))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        computer: Player,
        human: Player,
        difficulty: Difficulty,
    ) -> Option<usize> {
        debug_assert_eq!(human, computer.opponent());
        let choice = match difficulty {
            Difficulty::Easy => self.random_move(board),
            Difficulty::Medium => {
                if self.rng.gen_bool(MEDIUM_RANDOM_CHANCE) {
                    self.random_move(board)
                } else {
                    best_move(board, computer)
                }
            }
            Difficulty::Hard => best_move(board, computer),
        };
        debug!(?choice, %computer, %difficulty, "Computer chose square");
        choice
    }

    /// Uniformly random empty square.
    pub fn random_move(&mut self, board: &Board) -> Option<usize> {
        board.empty_indices().choose(&mut self.rng).copied()
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new()
    }
}
