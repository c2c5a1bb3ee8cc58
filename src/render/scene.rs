//! Backend-neutral description of one frame.
//!
//! Both frontends paint the same list of filled rectangles, so what the
//! player sees does not depend on the renderer.

use crate::game::{CollisionType, GameOutcome, GameState, Rect};

/// What a rectangle on screen represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    Wall,
    Food,
    SnakeHead,
    SnakeBody,
    /// The head after a crash
    Wreck,
}

impl Fill {
    /// Colour as (r, g, b)
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Fill::Wall => (128, 128, 128),
            Fill::Food => (255, 64, 64),
            Fill::SnakeHead => (0, 255, 128),
            Fill::SnakeBody => (0, 160, 64),
            Fill::Wreck => (255, 255, 0),
        }
    }
}

/// Background colour the canvas is cleared to
pub const BACKGROUND: (u8, u8, u8) = (0, 0, 0);

/// Ordered draw list: later entries paint over earlier ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub items: Vec<(Rect, Fill)>,
}

impl Scene {
    pub fn compose(state: &GameState) -> Self {
        let mut items = Vec::with_capacity(state.snake.len() + 5);

        if !state.food.is_empty() {
            items.push((state.food, Fill::Food));
        }

        for segment in state.snake.body_segments() {
            items.push((*segment, Fill::SnakeBody));
        }

        let head_fill = match state.outcome {
            GameOutcome::Crashed(_) => Fill::Wreck,
            _ => Fill::SnakeHead,
        };
        items.push((state.snake.head(), head_fill));

        for wall in state.playfield.wall_rects() {
            if !wall.is_empty() {
                items.push((wall, Fill::Wall));
            }
        }

        Self { items }
    }

    /// Topmost fill covering the rectangle, if any
    pub fn fill_at(&self, rect: &Rect) -> Option<Fill> {
        self.items
            .iter()
            .rev()
            .find(|(item, _)| item.intersects(rect))
            .map(|(_, fill)| *fill)
    }
}

/// Window title carrying the score
pub fn window_title(state: &GameState) -> String {
    match state.outcome {
        GameOutcome::Playing => format!("Score: {}", state.score),
        GameOutcome::Crashed(CollisionType::Wall) => format!(
            "Score: {} | Hit the wall - R to restart, Esc to quit",
            state.score
        ),
        GameOutcome::Crashed(CollisionType::SelfCollision) => format!(
            "Score: {} | Bit yourself - R to restart, Esc to quit",
            state.score
        ),
        GameOutcome::Cleared => format!(
            "Score: {} | Board cleared! R to restart, Esc to quit",
            state.score
        ),
    }
}
