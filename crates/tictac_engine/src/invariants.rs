//! State invariants.
//!
//! Logical properties that hold after every applied move. Debug builds
//! assert them as a set; tests check them one at a time.

use super::game::GameState;
use super::phases::Phase;
use super::{Player, Square};

/// A property that must hold for a state.
pub trait Invariant<S> {
    /// Checks the property.
    fn holds(state: &S) -> bool;

    /// Human-readable description.
    fn description() -> &'static str;
}

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X has as many marks as O, or one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Every history entry is on the board and nothing else is.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        game.history().len() == board.filled()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.position.to_index()) == Some(Square::Occupied(mv.player)))
    }

    fn description() -> &'static str {
        "Move history matches the occupied squares"
    }
}

/// History alternates X, O, X, ... and the turn follows it while in progress.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }
        if game.phase() != Phase::InProgress {
            return true;
        }
        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

/// All game invariants.
pub type GameInvariants = (BalancedMarks, HistoryConsistent, AlternatingTurn);

/// Panics in debug builds when any invariant fails.
pub fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Invariant violation: {descriptions}");
    }
}
