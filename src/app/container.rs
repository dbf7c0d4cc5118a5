//! Wiring from configuration to choosers and sessions.

use super::config::SessionConfig;
use crate::{
    Result,
    ports::MoveChooser,
    session::Session,
    strategy::{RandomBlockingChooser, SearchChooser, StrategyKind},
};

/// Builds sessions from configuration.
///
/// # Examples
///
/// ```
/// use noughts::app::{App, SessionConfig};
/// use noughts::strategy::StrategyKind;
///
/// let app = App::new().with_default_seed(7);
/// let session = app.create_session(SessionConfig::new(StrategyKind::RandomBlocking))?;
/// assert_eq!(session.chooser_name(), "RandomBlocking");
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Seed used when a configuration does not carry one
    default_seed: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every random chooser that has no seed of its own.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Create the chooser a configuration asks for.
    pub fn create_chooser(&self, config: &SessionConfig) -> Result<Box<dyn MoveChooser>> {
        config.validate()?;
        let seed = config.seed.or(self.default_seed);

        let name = strategy_name(config.strategy);
        let chooser: Box<dyn MoveChooser> = match config.strategy.search_variant() {
            Some(variant) => Box::new(SearchChooser::new(name, variant, config.count_nodes)),
            None => {
                let p = config.random_move_probability;
                match seed {
                    Some(seed) => Box::new(RandomBlockingChooser::with_seed(name, p, seed)),
                    None => Box::new(RandomBlockingChooser::new(name, p)),
                }
            }
        };

        log::debug!("created {} chooser", chooser.name());
        Ok(chooser)
    }

    /// Create a fresh session with an empty board.
    pub fn create_session(&self, config: SessionConfig) -> Result<Session> {
        let chooser = self.create_chooser(&config)?;
        Session::new(config, chooser)
    }
}

fn strategy_name(kind: StrategyKind) -> String {
    match kind {
        StrategyKind::Minimax => "Minimax",
        StrategyKind::AlphaBeta => "AlphaBeta",
        StrategyKind::RandomBlocking => "RandomBlocking",
    }
    .to_string()
}
