use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::scene::{Fill, Scene};
use crate::game::{CollisionType, GameOutcome, GameState};
use crate::metrics::GameMetrics;

/// Draws the game into a terminal frame, two characters per cell
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Stats
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        if state.is_alive() {
            frame.render_widget(self.render_board(state), chunks[1]);
        } else {
            frame.render_widget(self.render_game_over(state, metrics), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let scene = Scene::compose(state);
        let field = state.playfield;

        let lines: Vec<Line> = (0..field.rows)
            .map(|row| {
                let spans: Vec<Span> = (0..field.cols)
                    .map(|col| cell_span(scene.fill_at(&field.cell_rect(col, row))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                state.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best(state.score).to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let (headline, colour) = match state.outcome {
            GameOutcome::Cleared => ("BOARD CLEARED", Color::Green),
            GameOutcome::Crashed(CollisionType::Wall) => ("GAME OVER - hit the wall", Color::Red),
            GameOutcome::Crashed(CollisionType::SelfCollision) => {
                ("GAME OVER - bit yourself", Color::Red)
            }
            GameOutcome::Playing => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                headline,
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.games_played.to_string()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(colour)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-character glyph for one grid cell
fn cell_span(fill: Option<Fill>) -> Span<'static> {
    let (glyph, style) = match fill {
        Some(Fill::Wall) => ("██", Style::default().fg(Color::Gray)),
        Some(Fill::Food) => ("()", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Some(Fill::SnakeHead) => (
            "■ ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Some(Fill::SnakeBody) => ("□ ", Style::default().fg(Color::Green)),
        Some(Fill::Wreck) => ("X ", Style::default().fg(Color::Yellow)),
        None => ("  ", Style::default()),
    };

    Span::styled(glyph, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_shows_score_and_snake() {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(1),
            ..GameConfig::small()
        });
        let mut state = engine.reset();
        state.score = 7;

        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 7"));
        assert!(text.contains("■"));
        assert!(text.contains("█"));
    }

    #[test]
    fn test_game_over_panel() {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(1),
            ..GameConfig::small()
        });
        let mut state = engine.reset();
        state.end(GameOutcome::Crashed(CollisionType::Wall));

        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("hit the wall"));
        assert!(text.contains("Final Score: 0"));
    }
}
