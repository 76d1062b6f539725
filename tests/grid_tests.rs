//! Grid and collision behavior through the public API.

use neotris::core::{collides, Grid, ShapeKind};
use neotris::types::{GRID_HEIGHT, GRID_WIDTH};

#[test]
fn grid_dimensions_are_fixed() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(
        grid.cells().len(),
        (GRID_WIDTH as usize) * (GRID_HEIGHT as usize)
    );
}

#[test]
fn every_row_keeps_the_declared_width_through_mutation() {
    let mut grid = Grid::new();

    // Fill and clear a few rows; the flat array length never changes, which
    // is the row-length invariant in this representation.
    for y in [0, 3, 7] {
        for x in 0..GRID_WIDTH {
            grid.set(x, y, 1);
        }
    }
    grid.merge(&ShapeKind::T.shape(), 2, 10);
    grid.clear_row(3);
    grid.clear_row(0);

    assert_eq!(
        grid.cells().len(),
        (GRID_WIDTH as usize) * (GRID_HEIGHT as usize)
    );
    // Reads on every declared coordinate still succeed.
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            assert!(grid.get(x, y).is_some());
        }
    }
}

#[test]
fn cleared_row_pulls_the_row_above_into_its_place() {
    let mut grid = Grid::new();
    for x in 0..GRID_WIDTH {
        grid.set(x, 4, 1);
    }
    grid.set(0, 5, 1);
    grid.set(9, 5, 1);

    grid.clear_row(4);

    assert_eq!(grid.get(0, 4), Some(1));
    assert_eq!(grid.get(9, 4), Some(1));
    assert_eq!(grid.get(0, 5), Some(0));
    assert!(!grid.is_row_full(4));
}

#[test]
fn collision_is_open_above_the_top_edge_only() {
    let grid = Grid::new();
    let square = ShapeKind::O.shape();

    // Entirely above the top: free at any horizontal offset.
    assert!(!collides(&grid, &square, -3, GRID_HEIGHT));
    assert!(!collides(&grid, &square, GRID_WIDTH + 1, GRID_HEIGHT + 2));

    // Sides and floor are closed.
    assert!(collides(&grid, &square, -1, 5));
    assert!(collides(&grid, &square, GRID_WIDTH - 1, 5));
    assert!(collides(&grid, &square, 4, -1));
}

#[test]
fn collision_sees_settled_cells() {
    let mut grid = Grid::new();
    grid.set(4, 0, 1);

    let square = ShapeKind::O.shape();
    assert!(collides(&grid, &square, 4, 0));
    assert!(collides(&grid, &square, 3, 0));
    assert!(!collides(&grid, &square, 5, 0));
    assert!(!collides(&grid, &square, 4, 1));
}

#[test]
fn merged_shape_lands_exactly_where_placed() {
    let mut grid = Grid::new();
    let shape = ShapeKind::L.shape();
    // L is:
    //   [0, 0, 1]
    //   [1, 1, 1]
    grid.merge(&shape, 6, 3);

    assert_eq!(grid.get(8, 3), Some(1));
    assert_eq!(grid.get(6, 4), Some(1));
    assert_eq!(grid.get(7, 4), Some(1));
    assert_eq!(grid.get(8, 4), Some(1));
    assert_eq!(grid.cells().iter().filter(|&&c| c != 0).count(), 4);
}
