//! Collision engine - pure shape-vs-grid overlap and bounds testing.
//!
//! The bounds contract is deliberately asymmetric: rows at or above the top
//! edge (`y >= height`) never collide, while the floor (`y < 0`) and both
//! horizontal edges always do. The open top lets a rotation near the spawn
//! row poke above the visible field; the closed floor and sides keep pieces
//! inside it everywhere else.

use crate::core::grid::Grid;
use crate::core::pieces::Shape;

/// True iff placing `shape` with its origin at `(x, y)` overlaps a settled
/// cell or leaves the field anywhere except above the top edge.
pub fn collides(grid: &Grid, shape: &Shape, x: i16, y: i16) -> bool {
    for (row, col, _) in shape.occupied_cells() {
        let cell_x = x + col;
        let cell_y = y + row;

        if cell_y >= grid.height() {
            // Above the top edge: unobstructed, regardless of column.
            continue;
        }
        if cell_y < 0 || cell_x < 0 || cell_x >= grid.width() {
            return true;
        }
        if grid.get(cell_x, cell_y).unwrap_or(0) != 0 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::ShapeKind;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn test_empty_grid_interior_is_free() {
        let grid = Grid::new();
        let shape = ShapeKind::O.shape();
        assert!(!collides(&grid, &shape, 4, 10));
        assert!(!collides(&grid, &shape, 0, 0));
        assert!(!collides(&grid, &shape, GRID_WIDTH - 2, 0));
    }

    #[test]
    fn test_above_top_edge_never_collides() {
        let grid = Grid::new();
        let shape = ShapeKind::O.shape();

        // Entirely above the top edge: free at any horizontal offset,
        // including offsets that would be out of bounds inside the field.
        for x in [-5, 0, 4, GRID_WIDTH, GRID_WIDTH + 3] {
            assert!(!collides(&grid, &shape, x, GRID_HEIGHT));
            assert!(!collides(&grid, &shape, x, GRID_HEIGHT + 7));
        }
    }

    #[test]
    fn test_partially_above_top_checks_visible_rows_only() {
        let grid = Grid::new();
        let shape = ShapeKind::I.shape();

        // Three of four cells above the top: the lone visible cell is free.
        assert!(!collides(&grid, &shape, 0, GRID_HEIGHT - 1));
        // Same straddle but horizontally outside: the visible cell collides.
        assert!(collides(&grid, &shape, -1, GRID_HEIGHT - 1));
        assert!(collides(&grid, &shape, GRID_WIDTH, GRID_HEIGHT - 1));
    }

    #[test]
    fn test_side_bounds_collide() {
        let grid = Grid::new();
        let shape = ShapeKind::O.shape();
        assert!(collides(&grid, &shape, -1, 10));
        assert!(collides(&grid, &shape, GRID_WIDTH - 1, 10));
    }

    #[test]
    fn test_floor_collides() {
        let grid = Grid::new();
        let shape = ShapeKind::O.shape();
        assert!(!collides(&grid, &shape, 4, 0));
        assert!(collides(&grid, &shape, 4, -1));
    }

    #[test]
    fn test_settled_cells_collide_only_on_occupied_shape_cells() {
        let mut grid = Grid::new();
        grid.set(4, 5, 1);

        let shape = ShapeKind::S.shape();
        // S occupies (0,1),(0,2),(1,0),(1,1); (0,0) is empty.
        // Place so the settled block lines up with the empty corner.
        assert!(!collides(&grid, &shape, 4, 5));
        // Shift so an occupied cell lands on the block.
        assert!(collides(&grid, &shape, 3, 5));
    }
}
