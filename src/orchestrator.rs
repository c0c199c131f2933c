//! Game orchestration between the terminal and the engine.
//!
//! The orchestrator owns the [`GameState`] and the [`Opponent`]. Human input
//! arrives as lines; engine events leave as [`UiEvent`]s on a channel. When
//! the computer is to move, a thinking pause is raced against input: a
//! restart during the pause starts a new match and the old computer move is
//! discarded, a quit abandons it.

use crate::render::status_line;
use anyhow::Result;
use std::pin::Pin;
use std::time::Duration;
use tictac_engine::{
    GameEvent, GameState, MatchConfig, Opponent, PendingMove, Position, ScoreBoard,
};
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tokio::time::Sleep;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Forwarded engine event.
    Game(GameEvent),
    /// Board after a change.
    Board(String),
    /// Whose turn it is.
    Status(String),
    /// Input that was refused, with the reason.
    Rejected(String),
    /// Current session score.
    Scores(ScoreBoard),
    /// Command reference.
    Help,
}

/// A line of input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark at this index.
    Select(usize),
    /// Start a new match with the same configuration.
    Restart,
    /// Show the score.
    Scores,
    /// Show the command reference.
    Help,
    /// Leave.
    Quit,
}

impl Command {
    /// Parses a line; `None` if it is not a command.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Ok(index) = line.parse::<usize>() {
            return Some(Command::Select(index));
        }
        match line.to_lowercase().as_str() {
            "restart" | "r" | "play again" => Some(Command::Restart),
            "scores" | "score" | "s" => Some(Command::Scores),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => Position::parse(line).map(|pos| Command::Select(pos.to_index())),
        }
    }
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// What woke the loop up.
enum Wake {
    ThinkingDone,
    Line(Option<String>),
}

/// Drives one session of matches.
pub struct Orchestrator {
    state: GameState,
    config: MatchConfig,
    opponent: Opponent,
    think_delay: Duration,
    event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator. No match starts until [`run`](Self::run).
    pub fn new(
        config: MatchConfig,
        opponent: Opponent,
        think_delay: Duration,
        event_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            state: GameState::new(),
            config,
            opponent,
            think_delay,
            event_tx,
        }
    }

    /// The session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts a new match with the configured settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<()> {
        self.state.reset(self.config);
        self.flush()
    }

    /// Runs matches until `quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        info!(config = ?self.config, "Starting game orchestration");
        let mut lines = input.lines();
        let mut thinking: Option<(PendingMove, Pin<Box<Sleep>>)> = None;

        self.restart()?;

        loop {
            let stale = thinking
                .as_ref()
                .filter(|(pending, _)| !self.state.is_current(pending))
                .map(|(pending, _)| pending.match_id());
            if let Some(match_id) = stale {
                debug!(match_id, "Match restarted while computer was thinking; dropping its move");
                thinking = None;
            }
            if thinking.is_none()
                && let Some(pending) = self.state.pending_computer_move()
            {
                debug!(delay_ms = self.think_delay.as_millis() as u64, "Computer thinking");
                thinking = Some((pending, Box::pin(tokio::time::sleep(self.think_delay))));
            }

            let wake = match thinking.as_mut() {
                Some((_, delay)) => {
                    tokio::select! {
                        biased;
                        _ = delay.as_mut() => Wake::ThinkingDone,
                        line = lines.next_line() => Wake::Line(line?),
                    }
                }
                None => Wake::Line(lines.next_line().await?),
            };

            match wake {
                Wake::ThinkingDone => {
                    if let Some((pending, _)) = thinking.take() {
                        self.play_computer(pending)?;
                    }
                }
                Wake::Line(None) => {
                    debug!("Input closed");
                    break;
                }
                Wake::Line(Some(line)) => {
                    if self.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        info!(scores = %self.state.scores(), "Session over");
        Ok(())
    }

    /// Applies the computer's move once its pause has elapsed.
    fn play_computer(&mut self, pending: PendingMove) -> Result<()> {
        match self.state.play_pending(pending, &mut self.opponent) {
            Ok(status) => debug!(?status, "Computer moved"),
            Err(e) => warn!(error = %e, "Computer move not applied"),
        }
        self.flush()
    }

    #[instrument(skip(self))]
    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let Some(command) = Command::parse(line) else {
            self.send(UiEvent::Rejected(format!("unknown command {:?}", line.trim())))?;
            return Ok(Flow::Continue);
        };

        match command {
            Command::Select(index) => match self.state.select_cell(index) {
                Ok(_) => self.flush()?,
                Err(e) => self.send(UiEvent::Rejected(e.to_string()))?,
            },
            Command::Restart => self.restart()?,
            Command::Scores => self.send(UiEvent::Scores(*self.state.scores()))?,
            Command::Help => self.send(UiEvent::Help)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Forwards engine events, then the board, the score when a match ended,
    /// and the status line.
    fn flush(&mut self) -> Result<()> {
        let events = self.state.take_events();
        let board_changed = events.iter().any(|e| {
            matches!(
                e,
                GameEvent::MatchStarted(_) | GameEvent::MoveApplied { .. }
            )
        });
        let ended = events
            .iter()
            .any(|e| matches!(e, GameEvent::GameEnded(_)));

        for event in events {
            self.send(UiEvent::Game(event))?;
        }
        if board_changed {
            self.send(UiEvent::Board(self.state.board().display()))?;
        }
        if ended {
            self.send(UiEvent::Scores(*self.state.scores()))?;
        }
        if let Some(line) = status_line(&self.state) {
            self.send(UiEvent::Status(line))?;
        }
        Ok(())
    }

    fn send(&self, event: UiEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}
