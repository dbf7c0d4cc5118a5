//! Terminal scoring and the latent positional heuristic

use crate::tictactoe::{BoardState, CENTER, Player};

/// Score of a position the maximizer has won
pub const WIN_SCORE: i32 = 1;
/// Score of a position the maximizer has lost
pub const LOSS_SCORE: i32 = -1;
/// Score of a full board without a winner
pub const DRAW_SCORE: i32 = 0;

/// Bonus awarded by [`center_occupancy`] when the center belongs to the player
pub const CENTER_BONUS: i32 = 2;

/// Score a node at entry, or `None` if play continues.
///
/// `maximizing` says whether the side about to move is the maximizer. A
/// completed line was made by the side that just moved, so it scores
/// [`LOSS_SCORE`] when the maximizer is to move and [`WIN_SCORE`] otherwise.
pub fn terminal_score(board: &BoardState, maximizing: bool) -> Option<i32> {
    if board.check_winner() {
        Some(if maximizing { LOSS_SCORE } else { WIN_SCORE })
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Score an already-finished board from `player`'s point of view.
pub fn outcome_score(board: &BoardState, player: Player) -> i32 {
    match board.winner() {
        Some(winner) if winner == player => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

/// Center-occupancy bonus for `player`.
///
/// Not consulted by the search: every leaf the engine reaches is terminal,
/// and this heuristic stays informational until non-terminal cutoffs exist.
pub fn center_occupancy(board: &BoardState, player: Player) -> i32 {
    if board.get(CENTER) == player.to_cell() {
        CENTER_BONUS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_scores_against_side_to_move() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(terminal_score(&board, true), Some(LOSS_SCORE));
        assert_eq!(terminal_score(&board, false), Some(WIN_SCORE));
    }

    #[test]
    fn full_board_is_draw() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(terminal_score(&board, true), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&board, false), Some(DRAW_SCORE));
    }

    #[test]
    fn open_board_is_not_terminal() {
        let board = BoardState::from_string("X...O....").unwrap();
        assert_eq!(terminal_score(&board, true), None);
    }

    #[test]
    fn outcome_score_uses_winner() {
        let board = BoardState::from_string("OOOXX.X..").unwrap();
        assert_eq!(outcome_score(&board, Player::O), WIN_SCORE);
        assert_eq!(outcome_score(&board, Player::X), LOSS_SCORE);
    }

    #[test]
    fn center_heuristic() {
        let board = BoardState::from_string("....O....").unwrap();
        assert_eq!(center_occupancy(&board, Player::O), CENTER_BONUS);
        assert_eq!(center_occupancy(&board, Player::X), 0);
        assert_eq!(center_occupancy(&BoardState::new(), Player::X), 0);
    }
}
