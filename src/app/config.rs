//! Configuration types for session creation.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    strategy::{DEFAULT_RANDOM_MOVE_PROBABILITY, StrategyKind},
    tictactoe::Player,
};

/// Configuration for one game session.
///
/// Builder-style, and loadable from JSON where missing fields take their
/// defaults.
///
/// # Examples
///
/// ```
/// use noughts::{app::SessionConfig, strategy::StrategyKind, tictactoe::Player};
///
/// let config = SessionConfig::new(StrategyKind::Minimax)
///     .with_ai_player(Player::X)
///     .with_count_nodes(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Strategy the AI plays with
    pub strategy: StrategyKind,
    /// Symbol controlled by the AI; the human plays the other one
    pub ai_player: Player,
    /// Symbol that opens each game
    pub first_player: Player,
    /// Run the full-tree node-count sweep after each search decision
    pub count_nodes: bool,
    /// Chance the random-blocking tier ignores threats
    pub random_move_probability: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for the given strategy.
    ///
    /// Uses default values for other parameters:
    /// - AI plays O, X opens
    /// - No node-count sweep
    /// - Random move probability 0.6
    /// - Seed: None (non-deterministic)
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ai_player: Player::O,
            first_player: Player::X,
            count_nodes: false,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
            seed: None,
        }
    }

    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Enable or disable the full-tree diagnostic sweep.
    pub fn with_count_nodes(mut self, count_nodes: bool) -> Self {
        self.count_nodes = count_nodes;
        self
    }

    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The symbol the human controls
    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the random move probability
    /// is not a finite number in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let p = self.random_move_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidConfiguration {
                message: format!("random_move_probability must be within [0, 1], got {p}"),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = SessionConfig::default();
        assert_eq!(config.strategy, StrategyKind::AlphaBeta);
        assert_eq!(config.ai_player, Player::O);
        assert_eq!(config.human_player(), Player::X);
        assert_eq!(config.first_player, Player::X);
        assert!(!config.count_nodes);
        assert_eq!(config.random_move_probability, 0.6);
    }

    #[test]
    fn validate_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = SessionConfig::default().with_random_move_probability(p);
            assert!(config.validate().is_err(), "{p} should be rejected");
        }
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"strategy": "random-blocking", "seed": 5}"#).unwrap();
        assert_eq!(config.strategy, StrategyKind::RandomBlocking);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.ai_player, Player::O);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let config = SessionConfig::new(StrategyKind::Minimax)
            .with_ai_player(Player::X)
            .with_seed(11);

        config.save(&path).unwrap();
        assert_eq!(SessionConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SessionConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("open config"));
    }
}
