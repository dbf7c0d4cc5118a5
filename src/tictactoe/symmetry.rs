//! D4 symmetry group operations on the board and the line table

use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, CELL_COUNT, Cell},
    lines::Line,
};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a position (0-8)
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        // Reflect across the vertical axis, then rotate clockwise.
        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Map a line through the transform, returned in ascending index order
    pub fn transform_line(&self, line: &Line) -> Line {
        let mut mapped = line.map(|idx| self.transform_position(idx));
        mapped.sort_unstable();
        mapped
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; CELL_COUNT]) -> [Cell; CELL_COUNT] {
        let mut transformed = [Cell::Empty; CELL_COUNT];
        for (idx, &cell) in cells.iter().enumerate() {
            transformed[self.transform_position(idx)] = cell;
        }
        transformed
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // Reflect-then-rotate compositions are involutions.
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl BoardState {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        BoardState::from(t.apply_to_cells(self.cells()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::tictactoe::WINNING_LINES;

    #[test]
    fn all_transforms_are_distinct_permutations() {
        let transforms = D4Transform::all();
        assert_eq!(transforms.len(), 8);

        let images: BTreeSet<Vec<usize>> = transforms
            .iter()
            .map(|t| (0..9).map(|p| t.transform_position(p)).collect())
            .collect();
        assert_eq!(images.len(), 8);

        for image in images {
            let as_set: BTreeSet<usize> = image.iter().copied().collect();
            assert_eq!(as_set.len(), 9);
        }
    }

    #[test]
    fn center_is_fixed() {
        for t in D4Transform::all() {
            assert_eq!(t.transform_position(4), 4);
        }
    }

    #[test]
    fn inverse_round_trips_positions() {
        for t in D4Transform::all() {
            let inv = t.inverse();
            for pos in 0..9 {
                assert_eq!(inv.transform_position(t.transform_position(pos)), pos);
            }
        }
    }

    #[test]
    fn line_table_maps_onto_itself() {
        let table: BTreeSet<Line> = WINNING_LINES.iter().copied().collect();
        for t in D4Transform::all() {
            let mapped: BTreeSet<Line> = WINNING_LINES.iter().map(|l| t.transform_line(l)).collect();
            assert_eq!(mapped, table, "transform {t:?} does not preserve lines");
        }
    }

    #[test]
    fn rotation_moves_corner() {
        let t = D4Transform {
            rotation: 90,
            reflection: false,
        };
        let board = BoardState::from_string("X........").unwrap();
        assert_eq!(board.transform(&t).encode(), "..X......");
    }
}
