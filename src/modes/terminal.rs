use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use super::session::Session;
use crate::game::GameConfig;
use crate::input::InputHandler;
use crate::render::Renderer;

/// Plays the game in the terminal, drawn with block characters
pub struct TerminalMode {
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Last title pushed to the terminal emulator
    title: String,
}

impl TerminalMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            title: String::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("terminal frontend started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.session.config().tick_ms);
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.session.quit(),
                    }
                }

                _ = tick_timer.tick() => {
                    self.session.tick();
                }

                _ = render_timer.tick() => {
                    self.session.metrics_mut().update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), self.session.metrics());
                    }).context("Failed to draw frame")?;
                    self.sync_title(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.session.quit();
                }
            }

            if self.session.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.session.handle_key(action);
        }
    }

    /// Mirror the score into the terminal emulator's title bar
    fn sync_title(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let title = self.session.title();
        if title != self.title {
            execute!(terminal.backend_mut(), SetTitle(&title))
                .context("Failed to set terminal title")?;
            self.title = title;
        }
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
