//! Game-tree search: terminal scoring, the minimax walks and root selection

pub mod engine;
pub mod evaluator;
pub mod selector;

pub use engine::{SearchEngine, SearchStats, SearchVariant};
pub use evaluator::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, center_occupancy, terminal_score};
pub use selector::{MoveSelector, SearchResult, best_move};
