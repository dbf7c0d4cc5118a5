//! Whole-game analysis
//!
//! Tools that run the search over every reachable position rather than a
//! single decision: position enumeration, plain/alpha-beta comparison and
//! exhaustive adversarial play.

pub mod exhaustive;
pub mod positions;

pub use exhaustive::{ExhaustiveReport, exhaustive_play};
pub use positions::{Position, VariantComparison, compare_variants, reachable_positions};
