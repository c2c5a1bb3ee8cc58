use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::geometry::Playfield;

/// Upper bound on playable cells; one snake segment slot is kept per cell
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Side of one grid cell in pixels
    pub cell_size: u32,
    /// Number of segments the snake starts with
    pub initial_length: usize,
    /// Duration of one fixed game step
    pub tick_ms: u64,
    /// Seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 680,
            window_height: 400,
            cell_size: 20,
            initial_length: 1,
            tick_ms: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom window size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Default::default()
        }
    }

    /// A 10x10 cell field (8x8 playable) for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::from_config(self)
    }

    /// Reject geometry the game cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(self.tick_ms > 0, "tick duration must be positive");

        let max_side = i32::MAX as u32;
        ensure!(
            self.window_width <= max_side && self.window_height <= max_side,
            "a {}x{} window exceeds the largest supported side of {} px",
            self.window_width,
            self.window_height,
            max_side
        );

        let field = self.playfield();
        ensure!(
            field.cols >= 3 && field.rows >= 3,
            "a {}x{} window with {}px cells leaves no room inside the walls",
            self.window_width,
            self.window_height,
            self.cell_size
        );

        ensure!(
            field.capacity() <= MAX_GRID_CELLS,
            "a {}x{} cell grid has too many cells (at most {} playable cells)",
            field.cols,
            field.rows,
            MAX_GRID_CELLS
        );

        ensure!(self.initial_length > 0, "initial length must be at least 1");

        // The snake spawns in the centre cell heading right, body trailing left
        let spawn_col = field.cols / 2;
        let room = spawn_col as usize;
        ensure!(
            self.initial_length <= room,
            "initial length {} does not fit left of the spawn column ({} cells)",
            self.initial_length,
            room
        );

        // At least one free cell must remain for the first food
        ensure!(
            self.initial_length < field.capacity(),
            "a snake of length {} leaves no free cell in a {}-cell field",
            self.initial_length,
            field.capacity()
        );

        Ok(())
    }
}
