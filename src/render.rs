//! Text rendering of front-end events.

use crate::orchestrator::UiEvent;
use tictac_engine::{GameEvent, GameState, MatchConfig, Outcome, Phase, Turn};

/// Commands accepted on stdin.
pub const HELP: &str = "\
Commands:
  0-8 or a label (e.g. center, top-left)  place your mark
  restart | r                             start a new match
  scores | s                              show the score
  help | h                                show this help
  quit | q                                leave";

/// One-line description of a match configuration.
pub fn describe(config: &MatchConfig) -> String {
    match config {
        MatchConfig::TwoPlayer => "two players".to_string(),
        MatchConfig::VsComputer { human, difficulty } => format!(
            "you play {} against the {} computer",
            human,
            difficulty.to_string().to_lowercase()
        ),
    }
}

/// Status line for the current state, `None` once the match is over.
pub fn status_line(state: &GameState) -> Option<String> {
    if state.phase() != Phase::InProgress {
        return None;
    }
    match (state.config(), state.next_turn()) {
        (Some(MatchConfig::VsComputer { .. }), Turn::Human(_)) => Some("Your Turn".to_string()),
        (_, Turn::Computer(_)) => Some("Computer Thinking...".to_string()),
        (_, Turn::Human(player)) => Some(format!("Turn: {}", player)),
        (_, Turn::Over) => None,
    }
}

/// Text for one event, `None` for events with nothing to show.
pub fn render(event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::Game(GameEvent::MatchStarted(config)) => {
            Some(format!("New match: {}", describe(config)))
        }
        UiEvent::Game(GameEvent::MoveApplied { position, player }) => {
            Some(format!("{} -> {}", player, position))
        }
        UiEvent::Game(GameEvent::TurnChanged(_)) => None,
        UiEvent::Game(GameEvent::GameEnded(outcome)) => Some(match outcome {
            Outcome::Winner(_) => format!("Winner! {}", outcome),
            Outcome::Draw => format!("Draw! {}", outcome),
        }),
        UiEvent::Board(board) => Some(board.clone()),
        UiEvent::Status(line) => Some(line.clone()),
        UiEvent::Rejected(reason) => Some(format!("Can't do that: {}", reason)),
        UiEvent::Scores(scores) => Some(format!("Score  {}", scores)),
        UiEvent::Help => Some(HELP.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::{Difficulty, Player, Position, ScoreBoard};

    #[test]
    fn test_status_line_by_mode() {
        let mut state = GameState::new();
        assert_eq!(status_line(&state), None);

        state.reset(MatchConfig::TwoPlayer);
        assert_eq!(status_line(&state).as_deref(), Some("Turn: X"));

        state.reset(MatchConfig::vs_computer(Player::X, Difficulty::Easy));
        assert_eq!(status_line(&state).as_deref(), Some("Your Turn"));

        state.reset(MatchConfig::vs_computer(Player::O, Difficulty::Easy));
        assert_eq!(status_line(&state).as_deref(), Some("Computer Thinking..."));
    }

    #[test]
    fn test_render_events() {
        let moved = UiEvent::Game(GameEvent::MoveApplied {
            position: Position::Center,
            player: Player::O,
        });
        assert_eq!(render(&moved).as_deref(), Some("O -> Center"));

        let won = UiEvent::Game(GameEvent::GameEnded(Outcome::Winner(Player::X)));
        assert_eq!(render(&won).as_deref(), Some("Winner! Player X Wins!"));

        let drawn = UiEvent::Game(GameEvent::GameEnded(Outcome::Draw));
        assert_eq!(render(&drawn).as_deref(), Some("Draw! It's a draw!"));

        assert_eq!(render(&UiEvent::Game(GameEvent::TurnChanged(Player::X))), None);
        assert_eq!(
            render(&UiEvent::Scores(ScoreBoard::new())).as_deref(),
            Some("Score  X: 0  O: 0  Draws: 0")
        );
    }

    #[test]
    fn test_describe() {
        let config = MatchConfig::vs_computer(Player::O, Difficulty::Hard);
        assert_eq!(describe(&config), "you play O against the hard computer");
        assert_eq!(describe(&MatchConfig::TwoPlayer), "two players");
    }
}
