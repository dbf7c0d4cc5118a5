//! The closed set of move strategies
//!
//! A session picks one [`StrategyKind`] at construction. The two search
//! kinds share [`SearchChooser`]; the weaker random tier is
//! [`RandomBlockingChooser`].

pub mod blocking;
pub mod search;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use blocking::{DEFAULT_RANDOM_MOVE_PROBABILITY, RandomBlockingChooser, blocking_move};
pub use search::SearchChooser;

use crate::search::SearchVariant;

/// Strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Exhaustive minimax
    Minimax,
    /// Alpha-beta pruned minimax
    #[default]
    AlphaBeta,
    /// Random moves, sometimes blocking an immediate threat
    RandomBlocking,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::RandomBlocking,
    ];

    /// The search walk behind this strategy, if it searches
    pub fn search_variant(self) -> Option<SearchVariant> {
        match self {
            StrategyKind::Minimax => Some(SearchVariant::Minimax),
            StrategyKind::AlphaBeta => Some(SearchVariant::AlphaBeta),
            StrategyKind::RandomBlocking => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alpha-beta",
            StrategyKind::RandomBlocking => "random-blocking",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimax" | "plain" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(StrategyKind::AlphaBeta),
            "random-blocking" | "random" | "medium" => Ok(StrategyKind::RandomBlocking),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: StrategyKind::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
