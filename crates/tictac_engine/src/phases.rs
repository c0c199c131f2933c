//! Match lifecycle and terminal outcomes.

use super::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Lifecycle of a match.
///
/// `NotStarted -> InProgress` on reset, `InProgress -> Ended` on a win or
/// draw, and `Ended -> InProgress` only through another reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No match configured yet.
    #[default]
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Won or drawn; waiting for a reset.
    Ended,
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the match.
    Winner(Player),
    /// Match ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Terminal outcome for a status, `None` while in progress.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} Wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
