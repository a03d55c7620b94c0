//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use config::{ConfigError, GameConfig, MAX_GRID_DIMENSION};
pub use engine::{GameEngine, StepOutcome};
pub use food::{FoodSource, RandomFood, ScriptedFood};
pub use state::{CollisionType, GameState, Position, Snake};
