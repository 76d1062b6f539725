//! Piece catalog - the seven shape matrices and their rotation.
//!
//! Shapes are small rectangular 0/1 matrices, not fixed-size offset lists:
//! rotation works by rebuilding the matrix (transpose, then reverse the row
//! order), so a 2x3 shape becomes 3x2. The catalog is fixed for the lifetime
//! of the game.

use crate::types::CellValue;

/// The seven piece kinds in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    O,
    L,
    J,
    S,
    Z,
    I,
}

impl ShapeKind {
    /// Every kind, in catalog order. Uniform random spawns index into this.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
    ];

    /// Build this kind's spawn-orientation matrix.
    pub fn shape(self) -> Shape {
        let rows: &[&[CellValue]] = match self {
            ShapeKind::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            ShapeKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::I => &[&[1], &[1], &[1], &[1]],
        };
        Shape::from_rows(rows)
    }
}

/// A piece's cell matrix. Rectangular and non-empty by construction;
/// immutable except by replacement with a rotated copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<CellValue>>,
}

impl Shape {
    pub fn from_rows(rows: &[&[CellValue]]) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }

    /// Number of matrix rows.
    pub fn height(&self) -> i16 {
        self.rows.len() as i16
    }

    /// Number of matrix columns.
    pub fn width(&self) -> i16 {
        self.rows[0].len() as i16
    }

    /// Cell at matrix position `(row, col)`; 0 when out of range.
    pub fn cell(&self, row: i16, col: i16) -> CellValue {
        if row < 0 || col < 0 {
            return 0;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate the occupied cells as `(row, col, value)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i16, i16, CellValue)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &value)| value != 0)
                .map(move |(col, &value)| (row as i16, col as i16, value))
        })
    }

    /// A copy rotated a quarter turn: transpose, then reverse the rows.
    /// Applying this four times yields the original shape.
    pub fn rotated(&self) -> Shape {
        let height = self.rows.len();
        let width = self.rows[0].len();

        let mut rotated = vec![vec![0; height]; width];
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                rotated[col][row] = value;
            }
        }
        rotated.reverse();

        Shape { rows: rotated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!(ShapeKind::T.shape().width(), 3);
        assert_eq!(ShapeKind::T.shape().height(), 3);
        assert_eq!(ShapeKind::O.shape().width(), 2);
        assert_eq!(ShapeKind::O.shape().height(), 2);
        assert_eq!(ShapeKind::S.shape().width(), 3);
        assert_eq!(ShapeKind::S.shape().height(), 2);
        assert_eq!(ShapeKind::I.shape().width(), 1);
        assert_eq!(ShapeKind::I.shape().height(), 4);
    }

    #[test]
    fn test_catalog_cells_are_zero_or_one() {
        for kind in ShapeKind::ALL {
            let shape = kind.shape();
            for row in 0..shape.height() {
                for col in 0..shape.width() {
                    assert!(shape.cell(row, col) <= 1);
                }
            }
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let shape = ShapeKind::S.shape();
        let rotated = shape.rotated();
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
    }

    #[test]
    fn test_rotation_of_i_column() {
        let rotated = ShapeKind::I.shape().rotated();
        assert_eq!(rotated.height(), 1);
        assert_eq!(rotated.width(), 4);
        for col in 0..4 {
            assert_eq!(rotated.cell(0, col), 1);
        }
    }

    #[test]
    fn test_four_rotations_return_to_original() {
        for kind in ShapeKind::ALL {
            let original = kind.shape();
            let back = original.rotated().rotated().rotated().rotated();
            assert_eq!(back, original, "rotation period broken for {:?}", kind);
        }
    }

    #[test]
    fn test_rotation_preserves_occupied_count() {
        for kind in ShapeKind::ALL {
            let shape = kind.shape();
            let count = shape.occupied_cells().count();
            assert_eq!(shape.rotated().occupied_cells().count(), count);
        }
    }

    #[test]
    fn test_occupied_cells_of_t() {
        let cells: Vec<_> = ShapeKind::T.shape().occupied_cells().collect();
        assert_eq!(cells, vec![(0, 1, 1), (1, 0, 1), (1, 1, 1), (1, 2, 1)]);
    }
}
