//! Board state representation and in-place mutation

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Index of the center cell
pub const CENTER: usize = 4;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The 3x3 grid, row-major, index 0-8.
///
/// Mutation happens in place: `place` validates and writes a symbol, and the
/// search engine undoes its own writes with [`BoardState::clear`]. The board
/// does not track whose turn it is; the session does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from a slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless the slice holds
    /// exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, crate::Error> {
        let cells: [Cell; CELL_COUNT] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: CELL_COUNT,
                    got: cells.len(),
                    context: cells.iter().map(|c| c.to_char()).collect(),
                })?;
        Ok(BoardState { cells })
    }

    /// Create a board from a string representation.
    ///
    /// Each cell is one character: `X`, `O`, or one of `.`, `_`, space for
    /// an empty cell. Row separators (`/`, `|`) and line breaks are ignored,
    /// so `"XO./.X./..O"` and `"XO..X...O"` describe the same board.
    ///
    /// Turn balance is not checked here; see [`BoardState::next_to_move`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not describe exactly nine cells
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r' | '\t'))
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Borrow the raw cells
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Count pieces on the board.
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Determine whose turn it is, given which player opened the game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] if the counts cannot
    /// arise from alternating play started by `first`.
    pub fn next_to_move(&self, first: Player) -> Result<Player, crate::Error> {
        let count = self.piece_count();
        let (opener, other) = match first {
            Player::X => (count.x, count.o),
            Player::O => (count.o, count.x),
        };

        if opener == other {
            Ok(first)
        } else if opener == other + 1 {
            Ok(first.opponent())
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `player`'s symbol at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index outside 0-8 and
    /// [`crate::Error::InvalidMove`] for an occupied cell. The board is left
    /// untouched in both cases.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Restore `pos` to Empty.
    pub fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Write a symbol without validation. Search frames pair every call with
    /// a matching [`BoardState::clear`].
    pub(crate) fn put(&mut self, pos: usize, player: Player) {
        debug_assert!(self.is_empty(pos), "search wrote over occupied cell {pos}");
        self.cells[pos] = player.to_cell();
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// True if any line holds three identical symbols
    pub fn check_winner(&self) -> bool {
        LineAnalyzer::has_any_line(&self.cells)
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.check_winner() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.check_winner()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Compact nine-character encoding, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; CELL_COUNT]> for BoardState {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        BoardState { cells }
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
