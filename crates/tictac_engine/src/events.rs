//! Events surfaced to the presentation layer.

use super::{MatchConfig, Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Something the engine wants rendered.
///
/// Events queue up inside the game state and are drained with
/// [`GameState::take_events`](crate::GameState::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new match was configured and the board cleared.
    MatchStarted(MatchConfig),
    /// A mark was placed.
    MoveApplied {
        /// Where the mark went.
        position: Position,
        /// Whose mark it is.
        player: Player,
    },
    /// The player to move changed (also raised on reset for X).
    TurnChanged(Player),
    /// The match finished.
    GameEnded(Outcome),
}
