//! Reachable positions and variant comparison

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    search::{MoveSelector, SearchResult, SearchVariant},
    tictactoe::{BoardState, Player},
};

/// A non-terminal position with its side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: BoardState,
    pub to_move: Player,
}

/// Every non-terminal position reachable by alternating play when `first`
/// opens, the empty board included. Each position appears once.
pub fn reachable_positions(first: Player) -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    let mut board = BoardState::new();
    collect(&mut board, first, &mut seen, &mut positions);
    positions
}

fn collect(
    board: &mut BoardState,
    to_move: Player,
    seen: &mut HashSet<BoardState>,
    out: &mut Vec<Position>,
) {
    if board.is_terminal() || !seen.insert(*board) {
        return;
    }
    out.push(Position {
        board: *board,
        to_move,
    });

    for pos in board.empty_positions() {
        board.put(pos, to_move);
        collect(board, to_move.opponent(), seen, out);
        board.clear(pos);
    }
}

/// Both search variants run on the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantComparison {
    pub minimax: SearchResult,
    pub alpha_beta: SearchResult,
    pub minimax_nodes: u64,
    pub alpha_beta_nodes: u64,
}

impl VariantComparison {
    /// True when both variants chose the same move with the same score
    pub fn agree(&self) -> bool {
        self.minimax.best_move == self.alpha_beta.best_move
            && self.minimax.score == self.alpha_beta.score
    }

    /// Fraction of minimax nodes that alpha-beta skipped
    pub fn pruned_fraction(&self) -> f64 {
        if self.minimax_nodes == 0 {
            0.0
        } else {
            1.0 - self.alpha_beta_nodes as f64 / self.minimax_nodes as f64
        }
    }
}

/// Search `board` for `player` with both variants.
pub fn compare_variants(board: &mut BoardState, player: Player) -> VariantComparison {
    let mut plain = MoveSelector::new(SearchVariant::Minimax);
    let mut pruned = MoveSelector::new(SearchVariant::AlphaBeta);
    let minimax = plain.best_move(board, player);
    let alpha_beta = pruned.best_move(board, player);

    VariantComparison {
        minimax,
        alpha_beta,
        minimax_nodes: plain.stats().nodes,
        alpha_beta_nodes: pruned.stats().nodes,
    }
}
