//! Core module - pure game logic with no I/O dependencies.
//!
//! Everything in here is deterministic and unit-testable: the grid, the
//! piece catalog, collision, the RNG, and the simulation controller.

pub mod collide;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use collide::collides;
pub use game_state::{GameState, Player, SettleEvent};
pub use grid::Grid;
pub use pieces::{Shape, ShapeKind};
pub use rng::SimpleRng;
