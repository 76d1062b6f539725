//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! a held-direction auto-repeat handler for terminals with and without
//! key-release events.

pub mod handler;
pub mod map;

pub use handler::RepeatHandler;
pub use map::{map_key_event, should_quit};
