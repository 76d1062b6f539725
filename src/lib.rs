//! Neon falling-block puzzle game.
//!
//! The simulation lives in [`core`] as a pure, deterministic library;
//! [`input`] maps crossterm key events to game commands and [`term`] renders
//! the game state into a terminal framebuffer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
