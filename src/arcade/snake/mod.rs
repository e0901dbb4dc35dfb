//! Snake minigame.
//!
//! The snake moves one grid cell per tick in its current direction, grows by
//! one segment for every food it eats, and dies on hitting a wall or itself.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
