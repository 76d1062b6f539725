//! Shared constants and action types.
//! Pure data, no dependencies on the rest of the crate.

/// Playfield dimensions in cells.
pub const GRID_WIDTH: i16 = 10;
pub const GRID_HEIGHT: i16 = 20;

/// Game timing (milliseconds).
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Delay between auto-repeated horizontal moves while a direction is held.
pub const MOVE_REPEAT_MS: u32 = 300;

/// Points awarded per cleared row.
pub const ROW_CLEAR_SCORE: u32 = 10;

/// A single grid cell: 0 is empty, any nonzero value is occupied.
pub type CellValue = u8;

/// Commands accepted by the simulation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    Drop,
    Restart,
}
