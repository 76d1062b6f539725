//! Grid module - the persistent field of settled cells.
//!
//! A 10x20 matrix stored as a flat row-major array for cache locality and
//! zero allocation. Coordinates: `x` ranges over columns 0..9 left to right,
//! `y` ranges over rows 0..19 where row 0 is the floor and row 19 is the top
//! (spawn) edge. Gravity moves pieces toward row 0.

use crate::core::pieces::Shape;
use crate::types::{CellValue, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// The playfield. Every row always has exactly `GRID_WIDTH` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat cell array, row-major (`y * WIDTH + x`).
    cells: [CellValue; GRID_SIZE],
}

impl Grid {
    /// Create a new grid with all cells empty.
    pub fn new() -> Self {
        Self {
            cells: [0; GRID_SIZE],
        }
    }

    pub fn width(&self) -> i16 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i16 {
        GRID_HEIGHT
    }

    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Cell at `(x, y)`, or `None` if the position is out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<CellValue> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(x, y)`. Out-of-bounds writes are dropped and
    /// reported via the return value.
    pub fn set(&mut self, x: i16, y: i16, value: CellValue) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// True iff every cell in row `y` is occupied.
    pub fn is_row_full(&self, y: i16) -> bool {
        if y < 0 || y >= GRID_HEIGHT {
            return false;
        }
        let start = (y as usize) * (GRID_WIDTH as usize);
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Remove row `y`, shift every row above it down one index, and insert
    /// a fresh empty row at the top edge.
    pub fn clear_row(&mut self, y: i16) {
        if y < 0 || y >= GRID_HEIGHT {
            return;
        }
        let width = GRID_WIDTH as usize;
        let start = (y as usize) * width;
        let top = (GRID_HEIGHT as usize) * width;

        // copy_within handles the overlapping shift safely.
        self.cells.copy_within(start + width..top, start);
        for cell in &mut self.cells[top - width..top] {
            *cell = 0;
        }
    }

    /// Stamp a shape's occupied cells into the grid at `(x, y)`.
    ///
    /// Callers invoke this only after a reverted collision, so every cell
    /// that lies within the field is writable. Cells still above the top
    /// edge (reachable after a rotation near the spawn row) are discarded.
    pub fn merge(&mut self, shape: &Shape, x: i16, y: i16) {
        for (row, col, value) in shape.occupied_cells() {
            self.set(x + col, y + row, value);
        }
    }

    /// Borrow the raw cell array (row-major).
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
