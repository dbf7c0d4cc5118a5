//! Ports (trait boundaries) between the game core and its collaborators.

pub mod chooser;
pub mod observer;

pub use chooser::{Decision, MoveChooser};
pub use observer::Observer;
