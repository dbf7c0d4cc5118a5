//! Observer port - the presentation sink
//!
//! Front ends (terminal renderers, chart writers, loggers) receive moves,
//! diagnostics and terminal notifications through this trait instead of
//! being called from inside the game logic.

use std::time::Duration;

use super::Decision;
use crate::{
    Result,
    tictactoe::{BoardState, GameOutcome, Move},
};

/// Observer trait for monitoring a session
///
/// # Event Sequence
///
/// 1. `on_human_move` / `on_ai_move` - after each applied move, with the
///    board as it stands after the move
/// 2. `on_game_end` - once, when the move ends the game
/// 3. `on_reset` - when the session starts a new game
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::Observer, tictactoe::GameOutcome};
///
/// struct Scoreboard {
///     finished: usize,
/// }
///
/// impl Observer for Scoreboard {
///     fn on_game_end(&mut self, _outcome: GameOutcome) -> noughts::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called after a human move has been applied.
    fn on_human_move(&mut self, _mv: &Move, _board: &BoardState) -> Result<()> {
        Ok(())
    }

    /// Called after an AI move has been applied.
    ///
    /// `cumulative` is the total decision time of the current game,
    /// this move included.
    fn on_ai_move(
        &mut self,
        _mv: &Move,
        _board: &BoardState,
        _decision: &Decision,
        _cumulative: Duration,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once when a game finishes.
    fn on_game_end(&mut self, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when the session is reset for a new game.
    fn on_reset(&mut self) -> Result<()> {
        Ok(())
    }
}
