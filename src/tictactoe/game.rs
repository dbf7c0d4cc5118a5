//! Moves, outcomes and turn bookkeeping

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Read the outcome off a board, `None` while play continues.
    ///
    /// The winner is the owner of the completed line, so this is only
    /// meaningful for boards reached by legal play.
    pub fn from_board(board: &BoardState) -> Option<GameOutcome> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// State of play after a move has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress { to_move: Player },
    Finished(GameOutcome),
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_board() {
        let ongoing = BoardState::from_string("X........").unwrap();
        assert_eq!(GameOutcome::from_board(&ongoing), None);

        let won = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(
            GameOutcome::from_board(&won),
            Some(GameOutcome::Win(Player::X))
        );

        let drawn = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(GameOutcome::from_board(&drawn), Some(GameOutcome::Draw));
    }
}
