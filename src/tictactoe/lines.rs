//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{BoardState, Cell, Player};

/// A fixed index triple on the board
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// True iff any line holds three identical non-empty cells.
pub fn check_winner(board: &BoardState) -> bool {
    board.check_winner()
}

/// True iff no cell is empty.
pub fn is_full(board: &BoardState) -> bool {
    board.is_full()
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Check if any line is complete, regardless of owner
    pub fn has_any_line(cells: &[Cell; 9]) -> bool {
        WINNING_LINES.iter().any(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
        })
    }

    /// Find all positions that would immediately win for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &Line) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> [Cell; 9] {
        *BoardState::from_string(s).unwrap().cells()
    }

    #[test]
    fn test_has_won_horizontal() {
        let cells = cells("XXX......");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert!(LineAnalyzer::has_any_line(&cells));
    }

    #[test]
    fn test_has_won_vertical() {
        let cells = cells("O..O..O..");
        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let cells = cells("..X.X.X..");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = cells("XXO......");
        assert!(!LineAnalyzer::has_any_line(&cells));
    }

    #[test]
    fn test_winning_moves() {
        // X.X
        // ...
        // ...
        let cells = cells("X.X......");
        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let cells = cells("XX.X.....");
        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_has_no_winning_move() {
        let cells = cells("XXO......");
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_free_functions() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(is_full(&board));
        assert!(!check_winner(&board));
    }
}
