//! Game Module
//!
//! A player walking a tile map, chased by enemies, picking up potions.
//!
//! - `sprite`: sprite sheets and animation frame selection
//! - `entities`: Player, Enemy, Potion
//! - `tilemap`: Tiled JSON maps
//! - `systems`: per-frame behavior
//! - `state`: the `Game` that owns it all
//! - `viewport` / `renderer`: getting it on screen

pub mod sprite;
pub mod entities;
pub mod tilemap;
pub mod systems;
pub mod state;
pub mod viewport;
pub mod renderer;

pub use sprite::SheetId;
pub use tilemap::Tilemap;
pub use state::Game;
pub use viewport::Viewport;
pub use renderer::draw_game;
