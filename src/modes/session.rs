use log::info;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState, StepResult};
use crate::input::KeyAction;
use crate::metrics::GameMetrics;
use crate::render::window_title;

/// One player's run of games, independent of how it is drawn.
///
/// Key presses are buffered and applied on the next fixed tick, so the
/// loop driving a session only has to forward input and call `tick`.
pub struct Session {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    pending_direction: Option<Direction>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            pending_direction: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut GameMetrics {
        &mut self.metrics
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn should_quit(&self) -> bool {
        !self.state.running
    }

    pub fn title(&self) -> String {
        window_title(&self.state)
    }

    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::GameAction(Action::Move(direction)) => self.queue_turn(direction),
            KeyAction::GameAction(Action::Continue) | KeyAction::None => {}
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.quit(),
        }
    }

    /// Remember a turn for the next tick.
    ///
    /// Checked against the direction the snake last moved in, not against
    /// an earlier pending turn, so two quick presses cannot fold the snake
    /// back on itself within one tick.
    fn queue_turn(&mut self, direction: Direction) {
        if !self.state.is_alive() || self.state.snake.is_reversal(direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advance the game by one fixed step
    pub fn tick(&mut self) -> Option<StepResult> {
        if !self.state.is_alive() || self.should_quit() {
            return None;
        }

        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(&mut self.state, action);

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
            info!(
                "game {} over: {:?}, score {}, length {}",
                self.metrics.games_played,
                self.state.outcome,
                self.state.score,
                self.state.snake.len()
            );
        }

        Some(result)
    }

    pub fn restart(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.pending_direction = None;
    }

    pub fn quit(&mut self) {
        self.state.running = false;
    }
}
