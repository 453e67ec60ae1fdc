//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use super::board::{Cell, Square};

/// Symmetry of the square: an optional left-right mirror followed by a
/// clockwise rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to mirror before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// All 8 elements of the group
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            for reflection in [false, true] {
                transforms.push(D4Transform {
                    rotation,
                    reflection,
                });
            }
        }
        transforms
    }

    /// Map a square to its image under the transform
    pub fn transform_square(&self, square: Square) -> Square {
        let (mut row, mut col) = (square.row, square.col);

        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        Square::new(row, col)
    }

    pub fn apply_to_cells(&self, cells: &[Cell; 9]) -> [Cell; 9] {
        let mut transformed = [Cell::Empty; 9];
        for (idx, &cell) in cells.iter().enumerate() {
            transformed[self.transform_square(Square::from_index(idx)).index()] = cell;
        }
        transformed
    }
}
