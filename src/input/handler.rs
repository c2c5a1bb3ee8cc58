use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(feature = "window")]
use sdl2::keyboard::{Keycode, Mod};

use crate::game::{Action, Direction};

/// What a key press asks the game to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Restart,
    Quit,
    None,
}

/// Maps keyboard input from either frontend onto game actions.
///
/// Arrows and WASD steer, R restarts, Q, Esc and Ctrl+C quit.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate a terminal key event
    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match code {
            KeyCode::Up | KeyCode::Char('w') => steer(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => steer(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => steer(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => steer(Direction::Right),

            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('r') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }

    /// Translate an SDL key press
    #[cfg(feature = "window")]
    pub fn handle_keycode(&self, keycode: Keycode, keymod: Mod) -> KeyAction {
        let ctrl = keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD);
        if ctrl && keycode == Keycode::C {
            return KeyAction::Quit;
        }

        match keycode {
            Keycode::Up | Keycode::W => steer(Direction::Up),
            Keycode::Down | Keycode::S => steer(Direction::Down),
            Keycode::Left | Keycode::A => steer(Direction::Left),
            Keycode::Right | Keycode::D => steer(Direction::Right),

            Keycode::Escape | Keycode::Q => KeyAction::Quit,
            Keycode::R => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

fn steer(direction: Direction) -> KeyAction {
    KeyAction::GameAction(Action::Move(direction))
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
