//! Headless computer-vs-computer matches.

use derive_getters::Getters;
use tictac_engine::{
    Difficulty, GameState, MatchConfig, MoveError, Opponent, Outcome, Player, ScoreBoard,
};
use tracing::{debug, info, instrument};

/// Result of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SimulationReport {
    /// Difficulty of the first computer.
    computer: Difficulty,
    /// Difficulty of the second computer.
    challenger: Difficulty,
    /// Games won by the first computer.
    computer_wins: u32,
    /// Games won by the second computer.
    challenger_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Tally by symbol.
    scores: ScoreBoard,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} computer: {} wins",
            self.computer, self.computer_wins
        )?;
        writeln!(
            f,
            "{} challenger: {} wins",
            self.challenger, self.challenger_wins
        )?;
        writeln!(f, "Draws: {}", self.draws)?;
        write!(f, "By symbol  {}", self.scores)
    }
}

/// Plays `games` matches, swapping who opens each game.
///
/// The first computer plays X in even-numbered games and O in odd ones.
#[instrument]
pub fn simulate(
    games: u32,
    computer: Difficulty,
    challenger: Difficulty,
    seed: Option<u64>,
) -> Result<SimulationReport, MoveError> {
    let (mut first, mut second) = match seed {
        Some(seed) => (Opponent::seeded(seed), Opponent::seeded(seed.wrapping_add(1))),
        None => (Opponent::new(), Opponent::new()),
    };

    let mut state = GameState::new();
    let mut report = SimulationReport {
        computer,
        challenger,
        computer_wins: 0,
        challenger_wins: 0,
        draws: 0,
        scores: ScoreBoard::new(),
    };

    for game in 0..games {
        let computer_symbol = if game % 2 == 0 { Player::X } else { Player::O };
        state.reset(MatchConfig::TwoPlayer);

        while state.is_active() {
            let mover = state.current_player();
            let (opponent, difficulty) = if mover == computer_symbol {
                (&mut first, computer)
            } else {
                (&mut second, challenger)
            };
            let index = opponent
                .choose_move(state.board(), mover, mover.opponent(), difficulty)
                .ok_or(MoveError::NoLegalMove)?;
            state.apply_move(index, mover)?;
        }

        let outcome = Outcome::from_status(state.status()).ok_or(MoveError::GameOver)?;
        debug!(game, %outcome, "Simulated game finished");
        match outcome.winner() {
            Some(winner) if winner == computer_symbol => report.computer_wins += 1,
            Some(_) => report.challenger_wins += 1,
            None => report.draws += 1,
        }
        state.take_events();
    }

    report.scores = *state.scores();
    info!(
        computer_wins = report.computer_wins,
        challenger_wins = report.challenger_wins,
        draws = report.draws,
        "Simulation complete"
    );
    Ok(report)
}
