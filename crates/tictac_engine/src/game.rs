//! Game state and turn sequencing.
//!
//! [`GameState`] is the session object: it owns the board, the turn, the
//! lifecycle phase and the score board. Resets start a new match but keep
//! the scores, so the tally outlives individual matches.

use super::action::{Move, MoveError};
use super::config::MatchConfig;
use super::contracts::LegalMove;
use super::events::GameEvent;
use super::invariants::assert_invariants;
use super::opponent::Opponent;
use super::phases::{Outcome, Phase};
use super::rules;
use super::score::ScoreBoard;
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// A human places this symbol.
    Human(Player),
    /// The computer owes a move with this symbol.
    Computer(Player),
    /// No moves are accepted (not started or ended).
    Over,
}

/// A computer move owed to one particular match.
///
/// Obtained from [`GameState::pending_computer_move`] and redeemed with
/// [`GameState::play_pending`]. A reset in between makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingMove {
    match_id: u64,
    player: Player,
}

impl PendingMove {
    /// The match this move belongs to.
    pub fn match_id(&self) -> u64 {
        self.match_id
    }

    /// The computer's symbol.
    pub fn player(&self) -> Player {
        self.player
    }
}

/// Board, turn, lifecycle and scores for a session.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    locked: bool,
    config: Option<MatchConfig>,
    history: Vec<Move>,
    scores: ScoreBoard,
    match_id: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates a session with no match started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new match with `config`.
    ///
    /// Clears the board and history, gives the first move to X and unlocks
    /// input. When the computer plays X the board stays locked and a computer
    /// move is pending straight away. Scores are kept.
    #[instrument(skip(self), fields(match_id = self.match_id + 1))]
    pub fn reset(&mut self, config: MatchConfig) -> Turn {
        self.match_id += 1;
        self.board = Board::new();
        self.history.clear();
        self.current_player = Player::X;
        self.phase = Phase::InProgress;
        self.config = Some(config);
        self.locked = config.is_computer(Player::X);

        info!(?config, match_id = self.match_id, "Match started");
        self.events.push(GameEvent::MatchStarted(config));
        self.events.push(GameEvent::TurnChanged(Player::X));
        assert_invariants(self);
        self.next_turn()
    }

    /// Places `player`'s mark at `index` through the input path.
    ///
    /// Rejected without any change when no match is running, input is
    /// locked, the index is out of range, the square is taken, or it is not
    /// `player`'s turn.
    #[instrument(skip(self), fields(match_id = self.match_id))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveError> {
        let position = LegalMove::check(index, player, self).inspect_err(|e| {
            warn!(index, %player, error = %e, "Move rejected");
        })?;
        Ok(self.place(position, player))
    }

    /// Human input: places the current player's mark at `index`.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.apply_move(index, self.current_player)
    }

    /// The computer move owed right now, if any.
    pub fn pending_computer_move(&self) -> Option<PendingMove> {
        match self.next_turn() {
            Turn::Computer(player) => Some(PendingMove {
                match_id: self.match_id,
                player,
            }),
            Turn::Human(_) | Turn::Over => None,
        }
    }

    /// True if `pending` still belongs to the running match.
    pub fn is_current(&self, pending: &PendingMove) -> bool {
        pending.match_id == self.match_id && self.pending_computer_move() == Some(*pending)
    }

    /// Lets `opponent` choose and play the pending computer move.
    ///
    /// A token from an earlier match is rejected as [`MoveError::StaleMove`]
    /// and nothing is placed.
    #[instrument(skip(self, opponent), fields(match_id = self.match_id))]
    pub fn play_pending(
        &mut self,
        pending: PendingMove,
        opponent: &mut Opponent,
    ) -> Result<GameStatus, MoveError> {
        if pending.match_id != self.match_id {
            debug!(
                stale = pending.match_id,
                current = self.match_id,
                "Discarding computer move from previous match"
            );
            return Err(MoveError::StaleMove);
        }
        let Some(config @ MatchConfig::VsComputer { difficulty, .. }) = self.config else {
            return Err(MoveError::NoComputerTurn);
        };
        if self.pending_computer_move() != Some(pending) {
            return Err(MoveError::NoComputerTurn);
        }

        let computer = pending.player;
        let human = config.human().unwrap_or(computer.opponent());
        let index = opponent
            .choose_move(&self.board, computer, human, difficulty)
            .ok_or(MoveError::NoLegalMove)?;
        let position = LegalMove::check_placement(index, computer, self)?;
        Ok(self.place(position, computer))
    }

    /// Writes the mark and advances the match. Preconditions already hold.
    fn place(&mut self, position: Position, player: Player) -> GameStatus {
        self.board.set(position.to_index(), Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.events.push(GameEvent::MoveApplied { position, player });
        debug!(%position, %player, "Mark placed");

        let status = self.status();
        match Outcome::from_status(status) {
            Some(outcome) => self.finish(outcome),
            None => {
                self.current_player = player.opponent();
                self.locked = self
                    .config
                    .is_some_and(|config| config.is_computer(self.current_player));
                self.events.push(GameEvent::TurnChanged(self.current_player));
            }
        }

        assert_invariants(self);
        status
    }

    /// Terminal transition: freeze the turn, lock input, record the result once.
    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended;
        self.locked = true;
        self.scores.record(outcome);
        self.events.push(GameEvent::GameEnded(outcome));
        info!(%outcome, match_id = self.match_id, "Match ended");
    }

    /// True iff `player` holds a complete line.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(&self.board, player)
    }

    /// True iff the board is full and nobody has a line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Status recomputed from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Who moves next.
    pub fn next_turn(&self) -> Turn {
        if self.phase != Phase::InProgress {
            return Turn::Over;
        }
        match self.config {
            Some(config) if config.is_computer(self.current_player) => {
                Turn::Computer(self.current_player)
            }
            _ => Turn::Human(self.current_player),
        }
    }

    /// Drains events raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (frozen once the match ends).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a match is accepting moves.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// True while human input is refused.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Configuration of the current match.
    pub fn config(&self) -> Option<MatchConfig> {
        self.config
    }

    /// Moves of the current match.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Session scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Counter bumped by every reset.
    pub fn match_id(&self) -> u64 {
        self.match_id
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn force_turn(&mut self, player: Player) {
        self.current_player = player;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;

    fn two_player() -> GameState {
        let mut game = GameState::new();
        game.reset(MatchConfig::TwoPlayer);
        game
    }

    fn play(game: &mut GameState, moves: &[usize]) -> GameStatus {
        let mut status = game.status();
        for &index in moves {
            status = game.select_cell(index).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game_is_not_started() {
        let mut game = GameState::new();
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.next_turn(), Turn::Over);
        assert_eq!(game.select_cell(0), Err(MoveError::NotStarted));
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_reset_starts_with_x() {
        let mut game = GameState::new();
        assert_eq!(game.reset(MatchConfig::TwoPlayer), Turn::Human(Player::X));
        assert_eq!(game.phase(), Phase::InProgress);
        assert!(!game.is_locked());
        assert_eq!(game.match_id(), 1);
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::MatchStarted(MatchConfig::TwoPlayer),
                GameEvent::TurnChanged(Player::X)
            ]
        );
    }

    #[test]
    fn test_turn_flips_after_move() {
        let mut game = two_player();
        assert_eq!(game.select_cell(4), Ok(GameStatus::InProgress));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.apply_move(0, Player::X), Err(MoveError::WrongPlayer(Player::X)));
    }

    #[test]
    fn test_top_row_win_records_score() {
        let mut game = two_player();
        let status = play(&mut game, &[0, 4, 1, 7, 2]);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(game.check_win(Player::X));
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(*game.scores().x_wins(), 1);
        assert_eq!(game.select_cell(3), Err(MoveError::GameOver));
        assert_eq!(*game.scores().x_wins(), 1);
    }

    #[test]
    fn test_events_for_winning_move() {
        let mut game = two_player();
        play(&mut game, &[0, 4, 1, 7]);
        game.take_events();
        game.select_cell(2).unwrap();
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::MoveApplied {
                    position: Position::TopRight,
                    player: Player::X
                },
                GameEvent::GameEnded(Outcome::Winner(Player::X)),
            ]
        );
    }

    #[test]
    fn test_draw_records_score() {
        let mut game = two_player();
        let status = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(status, GameStatus::Draw);
        assert!(game.is_draw());
        assert!(!game.check_win(Player::X));
        assert!(!game.check_win(Player::O));
        assert_eq!(*game.scores().draws(), 1);
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut game = two_player();
        game.select_cell(4).unwrap();
        let board = *game.board();
        let status = game.status();

        assert_eq!(
            game.select_cell(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(*game.board(), board);
        assert_eq!(game.status(), status);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = two_player();
        assert_eq!(game.select_cell(9), Err(MoveError::OutOfRange(9)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut game = two_player();
        play(&mut game, &[0, 4, 1, 7, 2]);
        game.reset(MatchConfig::TwoPlayer);
        assert_eq!(*game.board(), Board::new());
        assert!(game.history().is_empty());
        assert_eq!(*game.scores().x_wins(), 1);
        assert_eq!(game.match_id(), 2);
    }

    #[test]
    fn test_computer_first_locks_and_plays() {
        let mut game = GameState::new();
        let turn = game.reset(MatchConfig::vs_computer(Player::O, Difficulty::Hard));
        assert_eq!(turn, Turn::Computer(Player::X));
        assert!(game.is_locked());
        assert_eq!(game.select_cell(0), Err(MoveError::BoardLocked));

        let pending = game.pending_computer_move().unwrap();
        let mut opponent = Opponent::seeded(5);
        assert_eq!(
            game.play_pending(pending, &mut opponent),
            Ok(GameStatus::InProgress)
        );
        assert_eq!(game.board().filled(), 1);
        assert_eq!(game.next_turn(), Turn::Human(Player::O));
        assert!(!game.is_locked());
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let mut game = GameState::new();
        game.reset(MatchConfig::vs_computer(Player::X, Difficulty::Easy));
        assert!(!game.is_locked());
        game.select_cell(4).unwrap();
        assert!(game.is_locked());
        assert_eq!(game.next_turn(), Turn::Computer(Player::O));
        assert_eq!(game.select_cell(0), Err(MoveError::BoardLocked));
    }

    #[test]
    fn test_stale_pending_move_discarded() {
        let mut game = GameState::new();
        let config = MatchConfig::vs_computer(Player::O, Difficulty::Easy);
        game.reset(config);
        let stale = game.pending_computer_move().unwrap();

        game.reset(config);
        assert!(!game.is_current(&stale));
        let mut opponent = Opponent::seeded(1);
        assert_eq!(
            game.play_pending(stale, &mut opponent),
            Err(MoveError::StaleMove)
        );
        assert_eq!(game.board().filled(), 0);

        let fresh = game.pending_computer_move().unwrap();
        assert!(game.is_current(&fresh));
        assert!(game.play_pending(fresh, &mut opponent).is_ok());
    }

    #[test]
    fn test_pending_token_spent_after_use() {
        let mut game = GameState::new();
        game.reset(MatchConfig::vs_computer(Player::O, Difficulty::Hard));
        let pending = game.pending_computer_move().unwrap();
        let mut opponent = Opponent::seeded(1);
        game.play_pending(pending, &mut opponent).unwrap();
        assert_eq!(
            game.play_pending(pending, &mut opponent),
            Err(MoveError::NoComputerTurn)
        );
    }

    #[test]
    fn test_two_player_never_locks() {
        let mut game = two_player();
        for index in [0, 3, 1, 4] {
            assert!(!game.is_locked());
            assert!(game.pending_computer_move().is_none());
            game.select_cell(index).unwrap();
        }
    }
}
