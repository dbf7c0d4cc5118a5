//! Move chooser port - the single "choose a move" contract
//!
//! Every strategy the session can be built with implements this trait:
//! - Exhaustive minimax
//! - Alpha-beta pruned minimax
//! - The random-with-blocking difficulty tier

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    instrumentation::Diagnostics,
    search::SearchResult,
    strategy::StrategyKind,
    tictactoe::{BoardState, Player},
};

/// What a chooser decided, with the measurements taken while deciding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Chosen cell, `None` when the board offers no move
    pub best_move: Option<usize>,
    /// Search score of the chosen cell, for choosers that search
    pub score: Option<i32>,
    pub diagnostics: Diagnostics,
}

impl Decision {
    /// Wrap a search result and its diagnostics
    pub fn from_search(result: SearchResult, diagnostics: Diagnostics) -> Self {
        Self {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.score),
            diagnostics,
        }
    }
}

/// Strategy interface used by the session.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::MoveChooser,
///     search::SearchVariant,
///     strategy::SearchChooser,
///     tictactoe::{BoardState, Player},
/// };
///
/// let mut chooser = SearchChooser::new("AlphaBeta".to_string(), SearchVariant::AlphaBeta, false);
/// let mut board = BoardState::from_string("XX.......").unwrap();
/// let decision = chooser.choose_move(&mut board, Player::O).unwrap();
/// assert_eq!(decision.best_move, Some(2));
/// ```
pub trait MoveChooser: Send {
    /// Pick a cell for `player` on `board`.
    ///
    /// The board may be mutated while deciding but must be restored,
    /// cell for cell, before this returns. A finished board yields a
    /// decision without a move.
    fn choose_move(&mut self, board: &mut BoardState, player: Player) -> Result<Decision>;

    /// Which strategy this chooser implements
    fn kind(&self) -> StrategyKind;

    /// Human-readable name for logs and the CLI
    fn name(&self) -> &str;

    /// Seed any internal random number generator.
    ///
    /// Deterministic choosers ignore the seed.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
