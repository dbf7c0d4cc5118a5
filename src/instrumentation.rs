//! Timing and node-count diagnostics around a move decision
//!
//! The full-tree count is a separate, unpruned minimax sweep. It costs about
//! as much as the decision itself, so it only runs when a caller asks for it.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::{
    search::{MoveSelector, SearchEngine, SearchResult, SearchVariant},
    tictactoe::{BoardState, Player},
};

/// Measurements taken around one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Wall-clock time spent choosing the move
    pub elapsed: Duration,
    /// Nodes the deciding search entered
    pub nodes_searched: u64,
    /// Alpha-beta cutoffs taken by the deciding search
    pub cutoffs: u64,
    /// Node count of the full unpruned tree, when requested
    pub full_tree_nodes: Option<u64>,
    /// Time spent on the full-tree sweep, when requested
    pub diagnostic_elapsed: Option<Duration>,
}

impl Diagnostics {
    /// Diagnostics carrying only a wall-clock measurement
    pub fn timed(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` and report how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Diagnostic pass: count every node of the unpruned tree below `board`
/// with `to_move` about to play, the root included.
///
/// The board is unchanged on return.
pub fn count_full_tree_nodes(board: &mut BoardState, to_move: Player) -> u64 {
    let mut engine = SearchEngine::new(SearchVariant::Minimax);
    engine.score(board, to_move, to_move);
    engine.stats().nodes
}

/// Choose a move for `player` and measure the decision.
///
/// With `count_nodes` set, the full-tree sweep runs after the decision and
/// its count is stored both in the diagnostics and in the result.
pub fn instrumented_best_move(
    selector: &mut MoveSelector,
    board: &mut BoardState,
    player: Player,
    count_nodes: bool,
) -> (SearchResult, Diagnostics) {
    selector.reset_stats();
    let (mut result, elapsed) = timed(|| selector.best_move(board, player));

    let mut diagnostics = Diagnostics {
        elapsed,
        nodes_searched: selector.stats().nodes,
        cutoffs: selector.stats().cutoffs,
        ..Diagnostics::default()
    };

    if count_nodes {
        let (nodes, sweep) = timed(|| count_full_tree_nodes(board, player));
        log::debug!("full-tree sweep visited {nodes} nodes in {sweep:?}");
        diagnostics.full_tree_nodes = Some(nodes);
        diagnostics.diagnostic_elapsed = Some(sweep);
        result.node_count = Some(nodes);
    }

    (result, diagnostics)
}

/// Per-decision durations for the plotting collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    durations: Vec<Duration>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, duration: Duration) {
        self.durations.push(duration);
    }

    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn clear(&mut self) {
        self.durations.clear();
    }

    pub fn total(&self) -> Duration {
        self.durations.iter().sum()
    }

    /// Running sums: `cumulative[i]` is the total of `durations[0..=i]`.
    pub fn cumulative(&self) -> Vec<Duration> {
        self.durations
            .iter()
            .scan(Duration::ZERO, |acc, &d| {
                *acc += d;
                Some(*acc)
            })
            .collect()
    }

    pub fn cumulative_secs(&self) -> Vec<f64> {
        self.cumulative().iter().map(Duration::as_secs_f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_is_running_sum() {
        let mut timeline = Timeline::new();
        for ms in [5, 10, 1] {
            timeline.record(Duration::from_millis(ms));
        }

        assert_eq!(
            timeline.cumulative(),
            vec![
                Duration::from_millis(5),
                Duration::from_millis(15),
                Duration::from_millis(16)
            ]
        );
        assert_eq!(timeline.total(), Duration::from_millis(16));
        assert_eq!(timeline.len(), 3);

        timeline.clear();
        assert!(timeline.is_empty());
        assert!(timeline.cumulative().is_empty());
    }

    #[test]
    fn full_tree_from_empty_board() {
        let mut board = BoardState::new();
        assert_eq!(count_full_tree_nodes(&mut board, Player::X), 549_946);
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn diagnostic_pass_only_when_requested() {
        let mut board = BoardState::from_string("X...O....").unwrap();
        let mut selector = MoveSelector::new(SearchVariant::AlphaBeta);

        let (result, diag) = instrumented_best_move(&mut selector, &mut board, Player::X, false);
        assert!(result.node_count.is_none());
        assert!(diag.full_tree_nodes.is_none());
        assert!(diag.nodes_searched > 0);

        let (result, diag) = instrumented_best_move(&mut selector, &mut board, Player::X, true);
        let full = diag.full_tree_nodes.expect("diagnostic pass should run");
        assert_eq!(result.node_count, Some(full));
        assert!(full > diag.nodes_searched);
        assert_eq!(board, BoardState::from_string("X...O....").unwrap());
    }
}
