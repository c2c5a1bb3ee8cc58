use anyhow::{Context, Result, anyhow};
use sdl2::{pixels::Color, rect::Rect as SdlRect, render::WindowCanvas};

use super::scene::{BACKGROUND, Fill, Scene, window_title};
use crate::game::{GameState, Rect};

/// Paints game frames onto an SDL window canvas
pub struct CanvasPainter {
    /// Title currently shown, to skip redundant updates
    title: String,
}

impl CanvasPainter {
    pub fn new() -> Self {
        Self {
            title: String::new(),
        }
    }

    pub fn paint(&mut self, canvas: &mut WindowCanvas, state: &GameState) -> Result<()> {
        canvas.set_draw_color(rgb(BACKGROUND));
        canvas.clear();

        for (rect, fill) in Scene::compose(state).items {
            canvas.set_draw_color(fill_color(fill));
            canvas
                .fill_rect(to_sdl(rect))
                .map_err(|e| anyhow!("Failed to fill {rect:?}: {e}"))?;
        }

        let title = window_title(state);
        if title != self.title {
            canvas
                .window_mut()
                .set_title(&title)
                .context("Failed to set window title")?;
            self.title = title;
        }

        canvas.present();
        Ok(())
    }
}

impl Default for CanvasPainter {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::RGB(r, g, b)
}

pub fn fill_color(fill: Fill) -> Color {
    rgb(fill.rgb())
}

pub fn to_sdl(rect: Rect) -> SdlRect {
    SdlRect::new(rect.x, rect.y, rect.w, rect.h)
}
