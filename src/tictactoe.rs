//! Tic-Tac-Toe board, win detection and symmetries

pub mod board;
pub mod game;
pub mod lines;
pub mod symmetry;

pub use board::{BoardState, CELL_COUNT, CENTER, Cell, PieceCount, Player};
pub use game::{GameOutcome, Move, Outcome};
pub use lines::{Line, LineAnalyzer, WINNING_LINES, check_winner, is_full};
pub use symmetry::D4Transform;
