//! Headless browser calculator.
//!
//! Owns one [`State`] and translates page-level events (button element ids,
//! `KeyboardEvent.key` names) into presses. Everything here runs on any
//! target, so the whole page wiring is testable without a browser.

use crate::core::{Input, State};

use super::keypad::WasmKeypad;

/// The calculator as the page sees it.
#[derive(Debug, Default)]
pub struct WasmCalculator {
    state: State,
    keypad: WasmKeypad,
}

impl WasmCalculator {
    /// Creates a calculator in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current readout text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The keypad layout backing the page markup.
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Feeds one input into the state machine.
    pub fn press(&mut self, input: Input) {
        self.state = std::mem::take(&mut self.state).press(input);
    }

    /// Handles a click on a keypad button, identified by its element id.
    /// Returns the readout after the press, or `None` for unknown ids.
    pub fn press_button(&mut self, id: &str) -> Option<String> {
        let input = self.keypad.input_for_id(id)?;
        self.press(input);
        Some(self.display().to_string())
    }

    /// Handles a `keydown` by its `KeyboardEvent.key` value. Returns the
    /// readout after the press, or `None` for keys the calculator ignores.
    pub fn press_key(&mut self, key: &str) -> Option<String> {
        let input = WasmKeypad::key_to_input(key)?;
        self.press(input);
        Some(self.display().to_string())
    }

    /// Resets to the initial state.
    pub fn reset(&mut self) {
        self.state = State::default();
    }
}
