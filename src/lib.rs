//! Grid Snake - the classic snake game on a square grid
//!
//! This library provides:
//! - Core game logic: state, transition function and food placement (game module)
//! - The tick loop with lifecycle and cancellable scheduling (control module)
//! - Terminal rendering and key mapping (render, input modules)
//! - The interactive terminal session (modes module)

pub mod control;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
