//! Flappy Bird minigame.
//!
//! Gravity pulls the bird down every tick, a jump resets its velocity to a
//! fixed upward impulse, and pipes scroll in from the right. Touching the
//! floor, the ceiling, or a pipe outside its gap ends the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
