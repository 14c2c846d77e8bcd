//! Keyboard and mouse input
//!
//! Input is read once per frame into a `FrameInput` snapshot so game logic
//! never touches macroquad's global input state directly.

mod state;

pub use state::*;
