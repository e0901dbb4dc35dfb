//! Tic-Tac-Toe minigame.
//!
//! Two players share the keyboard. No timer: the board only changes when a
//! move is played.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
