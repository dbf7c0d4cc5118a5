//! Common helpers for the noughts integration tests.

use noughts::tictactoe::{BoardState, Player};
use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

/// Parse a board literal, panicking on malformed input.
pub fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap_or_else(|e| panic!("bad board '{s}': {e}"))
}

/// Play up to `plies` random legal moves from the empty board, stopping at a
/// terminal position. Returns the board and the side to move.
pub fn random_position(rng: &mut StdRng, first: Player, plies: usize) -> (BoardState, Player) {
    let mut state = BoardState::new();
    let mut to_move = first;
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let empty = state.empty_positions();
        let Some(&pos) = empty.choose(rng) else {
            break;
        };
        state.place(pos, to_move).unwrap();
        to_move = to_move.opponent();
    }
    (state, to_move)
}

/// A random ply count for [`random_position`].
pub fn random_plies(rng: &mut StdRng) -> usize {
    rng.random_range(0..=9)
}
