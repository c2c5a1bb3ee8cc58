//! Arcade Snake - the classic game on a fixed grid of pixel rectangles
//!
//! This library provides:
//! - Core game logic (game module): geometry, snake locomotion, collisions, food
//! - Keyboard mapping for both frontends (input module)
//! - Drawing, either to an SDL2 window or a terminal (render module)
//! - In-session statistics (metrics module)
//! - The fixed-step loops that tie it together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
