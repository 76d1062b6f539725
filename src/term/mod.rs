//! Terminal rendering module.
//!
//! [`game_view`] projects the game state into a styled character
//! framebuffer (pure, unit-testable); [`renderer`] flushes framebuffers to
//! a raw-mode terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
