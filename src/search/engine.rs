//! Recursive minimax with an alpha-beta pruned variant
//!
//! Both walks mutate the board in place: each frame writes the mover's
//! symbol, recurses with the turn flipped, and clears the cell before
//! folding the child's score. Candidates are visited in ascending index
//! order, which fixes which branches alpha-beta cuts and therefore the
//! node counts reported in [`SearchStats`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::evaluator;
use crate::tictactoe::{BoardState, CELL_COUNT, Player};

/// Which tree walk to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchVariant {
    /// Exhaustive minimax, every branch visited
    Minimax,
    /// Minimax with alpha-beta cutoffs
    AlphaBeta,
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchVariant::Minimax => write!(f, "minimax"),
            SearchVariant::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Counters accumulated while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, terminal ones included
    pub nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
    /// Deepest ply reached below the first searched node
    pub max_depth: u32,
}

/// Game-tree search over a borrowed board.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    variant: SearchVariant,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(variant: SearchVariant) -> Self {
        Self {
            variant,
            stats: SearchStats::default(),
        }
    }

    pub fn variant(&self) -> SearchVariant {
        self.variant
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` with `to_move` about to play, from
    /// `maximizer`'s point of view.
    ///
    /// The board is identical, cell for cell, when this returns.
    pub fn score(&mut self, board: &mut BoardState, to_move: Player, maximizer: Player) -> i32 {
        match self.variant {
            SearchVariant::Minimax => self.minimax(board, 0, to_move, maximizer),
            SearchVariant::AlphaBeta => {
                self.alpha_beta(board, 0, i32::MIN, i32::MAX, to_move, maximizer)
            }
        }
    }

    fn enter(&mut self, depth: u32) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }

    fn minimax(
        &mut self,
        board: &mut BoardState,
        depth: u32,
        to_move: Player,
        maximizer: Player,
    ) -> i32 {
        self.enter(depth);
        let maximizing = to_move == maximizer;
        if let Some(score) = evaluator::terminal_score(board, maximizing) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in 0..CELL_COUNT {
            if !board.is_empty(pos) {
                continue;
            }
            board.put(pos, to_move);
            let score = self.minimax(board, depth + 1, to_move.opponent(), maximizer);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    fn alpha_beta(
        &mut self,
        board: &mut BoardState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Player,
        maximizer: Player,
    ) -> i32 {
        self.enter(depth);
        let maximizing = to_move == maximizer;
        if let Some(score) = evaluator::terminal_score(board, maximizing) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in 0..CELL_COUNT {
            if !board.is_empty(pos) {
                continue;
            }
            board.put(pos, to_move);
            let score =
                self.alpha_beta(board, depth + 1, alpha, beta, to_move.opponent(), maximizer);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
