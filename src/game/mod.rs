//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Positions are pixel rectangles on a grid of square cells, so any 2D backend can
//! draw the state directly.

pub mod action;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use geometry::{Playfield, Rect};
pub use state::{CollisionType, GameOutcome, GameState, Snake};
