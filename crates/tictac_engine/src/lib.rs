//! Tic-tac-toe engine.
//!
//! Pure game logic with no I/O: board and win/draw rules, a session
//! [`GameState`] that sequences turns and keeps score, and an [`Opponent`]
//! that plays easy (random), medium (blended) or hard (minimax) moves.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Difficulty, GameState, GameStatus, MatchConfig, Opponent, Player, Turn};
//!
//! let mut game = GameState::new();
//! let mut opponent = Opponent::seeded(42);
//!
//! // Human plays X against a hard computer.
//! let turn = game.reset(MatchConfig::vs_computer(Player::X, Difficulty::Hard));
//! assert_eq!(turn, Turn::Human(Player::X));
//!
//! assert_eq!(game.select_cell(4), Ok(GameStatus::InProgress));
//! let pending = game.pending_computer_move().expect("computer to move");
//! game.play_pending(pending, &mut opponent).expect("computer move");
//! assert_eq!(game.board().filled(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod events;
mod game;
mod phases;
mod position;
mod score;
mod types;

pub mod contracts;
pub mod invariants;
pub mod opponent;
pub mod rules;

pub use action::{Move, MoveError};
pub use config::{Difficulty, MatchConfig, MatchError, MatchSetup, Mode};
pub use events::GameEvent;
pub use game::{GameState, PendingMove, Turn};
pub use opponent::Opponent;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use score::ScoreBoard;
pub use types::{Board, CELLS, GameStatus, Player, Square};
