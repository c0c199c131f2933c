//! Match configuration.
//!
//! Selections arrive one at a time from the presentation layer (mode, then
//! symbol and difficulty in any order). [`MatchSetup`] collects them and
//! [`MatchSetup::build`] refuses to produce a computer match until both the
//! symbol and the difficulty have been chosen.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    Easy,
    /// Coin flip between random and optimal, per move.
    Medium,
    /// Always the minimax-optimal square.
    Hard,
}

/// Who sits on the other side of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays the computer.
    VsComputer,
}

/// Configuration of one match; immutable once the match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchConfig {
    /// Human vs human.
    TwoPlayer,
    /// Human vs computer. The computer always plays `human.opponent()`.
    VsComputer {
        /// Symbol the human plays.
        human: Player,
        /// Opponent strength.
        difficulty: Difficulty,
    },
}

impl MatchConfig {
    /// Creates a computer match.
    pub fn vs_computer(human: Player, difficulty: Difficulty) -> Self {
        MatchConfig::VsComputer { human, difficulty }
    }

    /// The mode of this configuration.
    pub fn mode(&self) -> Mode {
        match self {
            MatchConfig::TwoPlayer => Mode::TwoPlayer,
            MatchConfig::VsComputer { .. } => Mode::VsComputer,
        }
    }

    /// The computer's symbol, if a computer is playing.
    pub fn computer(&self) -> Option<Player> {
        match self {
            MatchConfig::TwoPlayer => None,
            MatchConfig::VsComputer { human, .. } => Some(human.opponent()),
        }
    }

    /// The human's symbol in a computer match.
    pub fn human(&self) -> Option<Player> {
        match self {
            MatchConfig::TwoPlayer => None,
            MatchConfig::VsComputer { human, .. } => Some(*human),
        }
    }

    /// The opponent strength in a computer match.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            MatchConfig::TwoPlayer => None,
            MatchConfig::VsComputer { difficulty, .. } => Some(*difficulty),
        }
    }

    /// True if `player` is controlled by the computer.
    pub fn is_computer(&self, player: Player) -> bool {
        self.computer() == Some(player)
    }
}

/// Why a match could not be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// No mode chosen.
    #[display("Choose two-player or vs-computer mode")]
    MissingMode,
    /// Computer match without a symbol.
    #[display("Choose X or O before starting a computer match")]
    MissingSymbol,
    /// Computer match without a difficulty.
    #[display("Choose a difficulty before starting a computer match")]
    MissingDifficulty,
}

impl std::error::Error for MatchError {}

/// Incremental match selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSetup {
    mode: Option<Mode>,
    human: Option<Player>,
    difficulty: Option<Difficulty>,
}

impl MatchSetup {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Chooses the human's symbol.
    pub fn symbol(mut self, human: Player) -> Self {
        self.human = Some(human);
        self
    }

    /// Chooses the difficulty.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Forgets every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True once [`build`](Self::build) would succeed.
    pub fn is_ready(&self) -> bool {
        self.build().is_ok()
    }

    /// Validates the selection.
    ///
    /// Two-player mode ignores symbol and difficulty. A computer match needs
    /// both; nothing is defaulted.
    #[instrument]
    pub fn build(&self) -> Result<MatchConfig, MatchError> {
        let config = match self.mode.ok_or(MatchError::MissingMode)? {
            Mode::TwoPlayer => MatchConfig::TwoPlayer,
            Mode::VsComputer => {
                let human = self.human.ok_or(MatchError::MissingSymbol)?;
                let difficulty = self.difficulty.ok_or(MatchError::MissingDifficulty)?;
                MatchConfig::vs_computer(human, difficulty)
            }
        };
        debug!(?config, "Match configured");
        Ok(config)
    }
}

impl TryFrom<MatchSetup> for MatchConfig {
    type Error = MatchError;

    fn try_from(setup: MatchSetup) -> Result<Self, Self::Error> {
        setup.build().inspect_err(|e| warn!(error = %e, "Refusing to start match"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_needs_nothing_else() {
        let config = MatchSetup::new().mode(Mode::TwoPlayer).build().unwrap();
        assert_eq!(config, MatchConfig::TwoPlayer);
        assert_eq!(config.computer(), None);
    }

    #[test]
    fn test_vs_computer_requires_symbol_and_difficulty() {
        let setup = MatchSetup::new().mode(Mode::VsComputer);
        assert_eq!(setup.build(), Err(MatchError::MissingSymbol));

        let setup = setup.difficulty(Difficulty::Hard);
        assert_eq!(setup.build(), Err(MatchError::MissingSymbol));

        let setup = MatchSetup::new().mode(Mode::VsComputer).symbol(Player::O);
        assert_eq!(setup.build(), Err(MatchError::MissingDifficulty));
        assert!(!setup.is_ready());

        let config = setup.difficulty(Difficulty::Medium).build().unwrap();
        assert_eq!(config.human(), Some(Player::O));
        assert_eq!(config.computer(), Some(Player::X));
        assert_eq!(config.difficulty(), Some(Difficulty::Medium));
    }

    #[test]
    fn test_missing_mode() {
        assert_eq!(MatchSetup::new().build(), Err(MatchError::MissingMode));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut setup = MatchSetup::new()
            .mode(Mode::VsComputer)
            .symbol(Player::X)
            .difficulty(Difficulty::Easy);
        assert!(setup.is_ready());
        setup.clear();
        assert_eq!(setup, MatchSetup::new());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("vs-computer".parse::<Mode>().unwrap(), Mode::VsComputer);
        assert_eq!("two-player".parse::<Mode>().unwrap(), Mode::TwoPlayer);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_config_serializes_lowercase() {
        let config = MatchConfig::vs_computer(Player::O, Difficulty::Hard);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"VsComputer":{"human":"o","difficulty":"hard"}}"#);
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(serde_json::to_string(&Mode::VsComputer).unwrap(), r#""vs-computer""#);
    }
}
