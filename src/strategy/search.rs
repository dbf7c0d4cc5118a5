//! Search-backed chooser for the minimax and alpha-beta strategies

use super::StrategyKind;
use crate::{
    Result,
    instrumentation::instrumented_best_move,
    ports::{Decision, MoveChooser},
    search::{MoveSelector, SearchVariant},
    tictactoe::{BoardState, Player},
};

/// Chooses the best move by full game-tree search.
pub struct SearchChooser {
    name: String,
    selector: MoveSelector,
    count_nodes: bool,
}

impl SearchChooser {
    /// Create a chooser; `count_nodes` enables the full-tree diagnostic
    /// sweep after every decision.
    pub fn new(name: String, variant: SearchVariant, count_nodes: bool) -> Self {
        Self {
            name,
            selector: MoveSelector::new(variant),
            count_nodes,
        }
    }

    pub fn variant(&self) -> SearchVariant {
        self.selector.variant()
    }
}

impl MoveChooser for SearchChooser {
    fn choose_move(&mut self, board: &mut BoardState, player: Player) -> Result<Decision> {
        let (result, diagnostics) =
            instrumented_best_move(&mut self.selector, board, player, self.count_nodes);
        Ok(Decision::from_search(result, diagnostics))
    }

    fn kind(&self) -> StrategyKind {
        match self.selector.variant() {
            SearchVariant::Minimax => StrategyKind::Minimax,
            SearchVariant::AlphaBeta => StrategyKind::AlphaBeta,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_carries_score_and_diagnostics() {
        let mut chooser = SearchChooser::new("Minimax".to_string(), SearchVariant::Minimax, true);
        let mut board = BoardState::from_string("XX..O....").unwrap();

        let decision = chooser.choose_move(&mut board, Player::O).unwrap();
        assert_eq!(decision.best_move, Some(2));
        assert_eq!(decision.score, Some(0));
        assert!(decision.diagnostics.full_tree_nodes.is_some());
        assert_eq!(chooser.kind(), StrategyKind::Minimax);
    }

    #[test]
    fn finished_board_yields_no_move() {
        let mut chooser =
            SearchChooser::new("AlphaBeta".to_string(), SearchVariant::AlphaBeta, false);
        let mut board = BoardState::from_string("XOXXOOOXX").unwrap();

        let decision = chooser.choose_move(&mut board, Player::O).unwrap();
        assert_eq!(decision.best_move, None);
        assert_eq!(decision.score, None);
    }
}
