//! First-class move records and move rejections.
//!
//! A rejected move never changes the game: every [`MoveError`] is a local,
//! synchronous refusal that leaves board, turn and scores untouched.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No match has been started yet.
    #[display("No game has been started")]
    NotStarted,

    /// The match already ended.
    #[display("Game is already over")]
    GameOver,

    /// Input is locked while the computer is to move.
    #[display("Board is locked while the computer is thinking")]
    BoardLocked,

    /// Index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square is taken.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// Not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A computer move owed to a match that has since been reset.
    #[display("Computer move belongs to a previous match")]
    StaleMove,

    /// No computer move is pending.
    #[display("It is not the computer's turn")]
    NoComputerTurn,

    /// The opponent found no empty square.
    #[display("No legal move available")]
    NoLegalMove,
}

impl std::error::Error for MoveError {}
