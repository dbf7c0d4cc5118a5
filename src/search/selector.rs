//! Root move selection

use serde::{Deserialize, Serialize};

use super::{
    engine::{SearchEngine, SearchStats, SearchVariant},
    evaluator,
};
use crate::tictactoe::{BoardState, CELL_COUNT, Player};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value of the chosen move for the player who searched
    pub score: i32,
    /// Chosen cell, `None` when the board offers no move
    pub best_move: Option<usize>,
    /// Full-tree node count, filled in only by the diagnostic pass
    pub node_count: Option<u64>,
}

impl SearchResult {
    /// True when the search had no legal move to choose from
    pub fn is_no_move(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Picks a move by searching every empty cell from the root.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    engine: SearchEngine,
}

impl MoveSelector {
    pub fn new(variant: SearchVariant) -> Self {
        Self {
            engine: SearchEngine::new(variant),
        }
    }

    pub fn variant(&self) -> SearchVariant {
        self.engine.variant()
    }

    /// Counters accumulated since construction or the last reset
    pub fn stats(&self) -> &SearchStats {
        self.engine.stats()
    }

    pub fn reset_stats(&mut self) {
        self.engine.reset_stats();
    }

    /// Minimax value of every empty cell for `player`, ascending by cell.
    ///
    /// Each candidate is searched with a fresh window, so the values are
    /// exact for both variants.
    pub fn evaluate_moves(&mut self, board: &mut BoardState, player: Player) -> Vec<(usize, i32)> {
        let mut scored = Vec::new();
        for pos in 0..CELL_COUNT {
            if !board.is_empty(pos) {
                continue;
            }
            board.put(pos, player);
            let score = self.engine.score(board, player.opponent(), player);
            board.clear(pos);

            log::trace!("{} candidate {pos} for {player} scored {score}", self.variant());
            scored.push((pos, score));
        }
        scored
    }

    /// Choose the best cell for `player`.
    ///
    /// Candidates are compared with a strict `>`, so among equal scores the
    /// lowest index wins. A finished board yields a result with no move and
    /// the board's outcome as its score. The board is unchanged on return.
    pub fn best_move(&mut self, board: &mut BoardState, player: Player) -> SearchResult {
        if board.is_terminal() {
            log::debug!("best_move called on finished board {}", board.encode());
            return SearchResult {
                score: evaluator::outcome_score(board, player),
                best_move: None,
                node_count: None,
            };
        }

        let mut best_score = i32::MIN;
        let mut best_move = None;
        for (pos, score) in self.evaluate_moves(board, player) {
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        log::debug!(
            "{} chose {:?} for {player} with score {best_score}",
            self.variant(),
            best_move
        );

        SearchResult {
            score: best_score,
            best_move,
            node_count: None,
        }
    }
}

/// One-shot convenience around [`MoveSelector::best_move`].
pub fn best_move(board: &mut BoardState, player: Player, variant: SearchVariant) -> SearchResult {
    MoveSelector::new(variant).best_move(board, player)
}
