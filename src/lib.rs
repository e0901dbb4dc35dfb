//! Pocket Arcade - snake, flappy bird and tic-tac-toe in the terminal.
//!
//! This module exposes the games, the window manager and the UI for the
//! binary and for integration tests.

pub mod arcade;
pub mod build_info;
pub mod core;
pub mod desk;
pub mod input;
pub mod shortcuts;
pub mod ui;
