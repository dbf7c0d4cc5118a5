//! Random-with-blocking chooser (the "medium" difficulty tier)
//!
//! With probability `random_move_probability` it plays a uniformly random
//! empty cell. Otherwise it blocks the opponent's first immediate win in
//! ascending cell order, falling back to a random cell. It never looks for
//! its own win or for forks.

use rand::{Rng, SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use super::StrategyKind;
use crate::{
    Result,
    instrumentation::{Diagnostics, timed},
    ports::{Decision, MoveChooser},
    tictactoe::{BoardState, LineAnalyzer, Player},
};

/// Chance of ignoring threats and moving at random
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.6;

/// The opponent's first immediately winning cell, which `player` should block.
pub fn blocking_move(board: &BoardState, player: Player) -> Option<usize> {
    LineAnalyzer::winning_moves(board.cells(), player.opponent())
        .into_iter()
        .next()
}

pub struct RandomBlockingChooser {
    name: String,
    rng: StdRng,
    random_move_probability: f64,
}

impl RandomBlockingChooser {
    /// Create a chooser seeded from entropy
    pub fn new(name: String, random_move_probability: f64) -> Self {
        Self::with_seed(name, random_move_probability, random())
    }

    /// Create a chooser with a deterministic seed
    pub fn with_seed(name: String, random_move_probability: f64, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
            random_move_probability: if random_move_probability.is_nan() {
                DEFAULT_RANDOM_MOVE_PROBABILITY
            } else {
                random_move_probability.clamp(0.0, 1.0)
            },
        }
    }

    fn pick(&mut self, board: &BoardState, player: Player) -> Option<usize> {
        let empty = board.empty_positions();
        if self.rng.random_bool(self.random_move_probability) {
            return empty.choose(&mut self.rng).copied();
        }

        if let Some(block) = blocking_move(board, player) {
            log::debug!("{} blocks at {block}", self.name);
            return Some(block);
        }
        empty.choose(&mut self.rng).copied()
    }
}

impl MoveChooser for RandomBlockingChooser {
    fn choose_move(&mut self, board: &mut BoardState, player: Player) -> Result<Decision> {
        if board.is_terminal() {
            return Ok(Decision {
                best_move: None,
                score: None,
                diagnostics: Diagnostics::default(),
            });
        }

        let (best_move, elapsed) = timed(|| self.pick(board, player));
        Ok(Decision {
            best_move,
            score: None,
            diagnostics: Diagnostics::timed(elapsed),
        })
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::RandomBlocking
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_blocking_cell() {
        let board = BoardState::from_string("XX..O....").unwrap();
        assert_eq!(blocking_move(&board, Player::O), Some(2));
        assert_eq!(blocking_move(&BoardState::new(), Player::O), None);
    }

    #[test]
    fn first_threat_in_ascending_order() {
        // X threatens 2 (top row) and 6 (left column).
        let board = BoardState::from_string("XX.XO...O").unwrap();
        assert_eq!(blocking_move(&board, Player::O), Some(2));
    }

    #[test]
    fn always_blocks_without_random_moves() {
        let mut chooser = RandomBlockingChooser::with_seed("Blocker".to_string(), 0.0, 7);
        let mut board = BoardState::from_string("XX..O....").unwrap();
        for _ in 0..20 {
            let decision = chooser.choose_move(&mut board, Player::O).unwrap();
            assert_eq!(decision.best_move, Some(2));
        }
        assert_eq!(board, BoardState::from_string("XX..O....").unwrap());
    }

    #[test]
    fn random_moves_are_legal_and_reproducible() {
        let board = BoardState::from_string("XO.X.O...").unwrap();
        let empty = board.empty_positions();

        let mut a = RandomBlockingChooser::with_seed("A".to_string(), 1.0, 42);
        let mut b = RandomBlockingChooser::with_seed("B".to_string(), 1.0, 42);
        for _ in 0..20 {
            let mut board_a = board;
            let mut board_b = board;
            let move_a = a.choose_move(&mut board_a, Player::X).unwrap().best_move;
            let move_b = b.choose_move(&mut board_b, Player::X).unwrap().best_move;
            assert_eq!(move_a, move_b);
            assert!(empty.contains(&move_a.unwrap()));
        }
    }

    #[test]
    fn reseeding_restarts_the_sequence() {
        let board = BoardState::from_string(".........").unwrap();
        let mut chooser = RandomBlockingChooser::with_seed("R".to_string(), 1.0, 1);

        let draw = |chooser: &mut RandomBlockingChooser| {
            let mut scratch = board;
            chooser.choose_move(&mut scratch, Player::X).unwrap().best_move
        };

        chooser.set_rng_seed(99).unwrap();
        let first: Vec<_> = (0..5).map(|_| draw(&mut chooser)).collect();
        chooser.set_rng_seed(99).unwrap();
        let second: Vec<_> = (0..5).map(|_| draw(&mut chooser)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn finished_board_yields_no_move() {
        let mut chooser = RandomBlockingChooser::with_seed("R".to_string(), 0.5, 3);
        let mut board = BoardState::from_string("XXXOO....").unwrap();
        let decision = chooser.choose_move(&mut board, Player::O).unwrap();
        assert_eq!(decision.best_move, None);
    }
}
