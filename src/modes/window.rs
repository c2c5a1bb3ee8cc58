use anyhow::{Context, Result, anyhow};
use log::info;
use sdl2::{event::Event, hint, render::WindowCanvas};
use std::time::{Duration, Instant};

use super::session::Session;
use super::ticker::FixedStep;
use crate::game::GameConfig;
use crate::input::InputHandler;
use crate::render::CanvasPainter;

/// Frame budget for polling input and redrawing between game ticks
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Plays the game in a native SDL2 window
pub struct WindowMode {
    session: Session,
    painter: CanvasPainter,
    input_handler: InputHandler,
}

impl WindowMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            painter: CanvasPainter::new(),
            input_handler: InputHandler::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let config = self.session.config().clone();

        let sdl = sdl2::init()
            .map_err(|e| anyhow!(e))
            .context("Failed to init SDL")?;
        let video = sdl
            .video()
            .map_err(|e| anyhow!(e))
            .context("Failed to init SDL video")?;

        let window = video
            .window(
                &self.session.title(),
                config.window_width,
                config.window_height,
            )
            .position_centered()
            .build()
            .with_context(|| {
                format!(
                    "Failed to open {} x {} window",
                    config.window_width, config.window_height
                )
            })?;

        hint::set("SDL_RENDER_SCALE_QUALITY", "linear");
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("Failed to create renderer")?;

        let mut event_pump = sdl
            .event_pump()
            .map_err(|e| anyhow!(e))
            .context("Failed to get SDL event pump")?;

        info!(
            "window frontend started: {}x{} px, {}ms ticks",
            config.window_width, config.window_height, config.tick_ms
        );

        let mut clock = FixedStep::new(Duration::from_millis(config.tick_ms));
        let mut last_frame = Instant::now();

        while !self.session.should_quit() {
            for event in event_pump.poll_iter() {
                self.handle_event(event);
            }

            let now = Instant::now();
            for _ in 0..clock.advance(now - last_frame) {
                self.session.tick();
            }
            last_frame = now;

            self.draw(&mut canvas)?;

            let spent = last_frame.elapsed();
            std::thread::sleep(FRAME_TIME.min(clock.until_next()).saturating_sub(spent));
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit { .. } => self.session.quit(),
            Event::KeyDown {
                keycode: Some(keycode),
                keymod,
                ..
            } => {
                let action = self.input_handler.handle_keycode(keycode, keymod);
                self.session.handle_key(action);
            }
            _ => {}
        }
    }

    fn draw(&mut self, canvas: &mut WindowCanvas) -> Result<()> {
        self.session.metrics_mut().update();
        self.painter.paint(canvas, self.session.state())
    }
}
