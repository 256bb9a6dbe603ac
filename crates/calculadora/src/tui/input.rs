//! Keyboard input handling for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Input, Operator};

/// What a key event means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a press into the calculator.
    Press(Input),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Input::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Input::Operator(Operator::Equals)),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Input::Clear),
            _ => KeyAction::None,
        }
    }
}
