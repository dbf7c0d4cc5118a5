//! Minimax and alpha-beta game-tree search for noughts and crosses
//!
//! This crate provides:
//! - A 3×3 board with in-place place/clear operations and win detection
//! - Exhaustive minimax and alpha-beta search with node statistics
//! - Root move selection with lowest-index tie-breaking
//! - Timing and full-tree node-count diagnostics
//! - A per-game session driving a human against one of the AI strategies
//! - Observer, export and whole-game analysis tooling

pub mod analysis;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod instrumentation;
pub mod observers;
pub mod ports;
pub mod search;
pub mod session;
pub mod strategy;
pub mod tictactoe;

pub use app::{App, SessionConfig};
pub use error::{Error, Result};
pub use search::{SearchResult, SearchVariant, best_move};
pub use session::{MoveResult, Session};
pub use strategy::StrategyKind;
pub use tictactoe::{BoardState, Cell, GameOutcome, Outcome, Player};
