//! Exhaustive adversarial play
//!
//! The AI answers with its chosen move while the opponent tries every
//! legal reply, so each distinct game the AI can be drawn into is played
//! exactly once.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{MoveSelector, SearchVariant},
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Outcome counts over every game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhaustiveReport {
    pub games: u64,
    pub ai_wins: u64,
    pub draws: u64,
    pub ai_losses: u64,
}

impl ExhaustiveReport {
    pub fn never_loses(&self) -> bool {
        self.ai_losses == 0
    }

    fn record(&mut self, outcome: GameOutcome, ai: Player) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(p) if p == ai => self.ai_wins += 1,
            GameOutcome::Win(_) => self.ai_losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play the AI (`ai`, searching with `variant`) against every possible
/// opponent line, starting from the empty board with `first` to move.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the search ever declines to move on a
/// live board.
pub fn exhaustive_play(variant: SearchVariant, ai: Player, first: Player) -> Result<ExhaustiveReport> {
    let mut selector = MoveSelector::new(variant);
    let mut report = ExhaustiveReport::default();
    let mut board = BoardState::new();
    play(&mut selector, &mut board, first, ai, &mut report)?;
    log::debug!(
        "{variant} as {ai}: {} games, {} wins, {} draws, {} losses",
        report.games,
        report.ai_wins,
        report.draws,
        report.ai_losses
    );
    Ok(report)
}

fn play(
    selector: &mut MoveSelector,
    board: &mut BoardState,
    to_move: Player,
    ai: Player,
    report: &mut ExhaustiveReport,
) -> Result<()> {
    if let Some(outcome) = GameOutcome::from_board(board) {
        report.record(outcome, ai);
        return Ok(());
    }

    if to_move == ai {
        let pos = selector
            .best_move(board, ai)
            .best_move
            .ok_or(Error::NoValidMoves)?;
        board.put(pos, ai);
        let result = play(selector, board, to_move.opponent(), ai, report);
        board.clear(pos);
        return result;
    }

    for pos in board.empty_positions() {
        board.put(pos, to_move);
        let result = play(selector, board, to_move.opponent(), ai, report);
        board.clear(pos);
        result?;
    }
    Ok(())
}
