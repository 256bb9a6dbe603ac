//! Terminal application state.
//!
//! A thin shell around the core state machine: it owns the current
//! [`State`], the keypad highlight, and the quit flag. All calculation
//! behaviour lives in the core; the app only routes presses into it.

use crate::core::{Input, State};

use super::keypad::Keypad;

/// Calculator application state.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: State,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current readout text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The keypad with its highlight state.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one press into the state machine and highlights its key.
    pub fn press(&mut self, input: Input) {
        self.keypad.highlight(input);
        self.state = std::mem::take(&mut self.state).press(input);
    }

    /// Resets the calculator and the keypad highlight. The quit flag is
    /// not part of the calculator state and survives.
    pub fn clear(&mut self) {
        self.state = State::default();
        self.keypad.release_all();
    }
}
