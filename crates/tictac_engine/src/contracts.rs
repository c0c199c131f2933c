//! Move preconditions.
//!
//! Each check is a small unit that can be tested on its own; [`LegalMove`]
//! composes them in the order a rejection should be reported.

use super::action::MoveError;
use super::game::GameState;
use super::phases::Phase;
use super::{Player, Position};
use tracing::instrument;

/// Precondition: a match is running.
pub struct GameActive;

impl GameActive {
    /// Rejects before the first reset and after the match ended.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match game.phase() {
            Phase::NotStarted => Err(MoveError::NotStarted),
            Phase::Ended => Err(MoveError::GameOver),
            Phase::InProgress => Ok(()),
        }
    }
}

/// Precondition: input is not locked for the computer's turn.
pub struct InputUnlocked;

impl InputUnlocked {
    /// Rejects while the board is locked.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_locked() {
            Err(MoveError::BoardLocked)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a square.
pub struct InBounds;

impl InBounds {
    /// Converts the index or rejects it.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(position.to_index()) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Precondition: it is the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects the player who is not to move.
    pub fn check(player: Player, game: &GameState) -> Result<(), MoveError> {
        if player == game.current_player() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(player))
        }
    }
}

/// All move preconditions, composed.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move through the input path (lock respected).
    #[instrument(skip(game))]
    pub fn check(index: usize, player: Player, game: &GameState) -> Result<Position, MoveError> {
        GameActive::check(game)?;
        InputUnlocked::check(game)?;
        Self::check_placement(index, player, game)
    }

    /// Validates everything except the input lock.
    ///
    /// Used for the computer's own move, which is what the lock waits for.
    #[instrument(skip(game))]
    pub fn check_placement(
        index: usize,
        player: Player,
        game: &GameState,
    ) -> Result<Position, MoveError> {
        GameActive::check(game)?;
        let position = InBounds::check(index)?;
        SquareIsEmpty::check(position, game)?;
        PlayersTurn::check(player, game)?;
        Ok(position)
    }
}
