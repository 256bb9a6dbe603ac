//! Keypad definition for the browser page.
//!
//! One button element per trigger, with stable DOM ids so the page markup,
//! the event wiring, and the tests all agree on the same names.

use crate::core::{Input, Operator, KEYPAD_ROWS};

/// DOM id of the readout element.
pub const DISPLAY_ID: &str = "calc-display";

/// A single button on the page: which input it produces, the element id,
/// the printed label, and its grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The input this button feeds into the state machine.
    pub input: Input,
    /// The DOM element id for this button.
    pub id: String,
    /// The printed label.
    pub label: String,
    /// Grid row (0-indexed).
    pub row: usize,
    /// Grid column (0-indexed).
    pub col: usize,
}

impl KeypadButtonDef {
    fn new(input: Input, row: usize, col: usize) -> Self {
        let id = match input {
            Input::Digit(d) => format!("btn-{d}"),
            Input::Decimal => "btn-decimal".to_string(),
            Input::Clear => "btn-clear".to_string(),
            Input::Operator(op) => format!("btn-{}", op_name(op)),
        };
        Self {
            input,
            id,
            label: input.legend().to_string(),
            row,
            col,
        }
    }
}

fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Equals => "equals",
    }
}

/// The page keypad layout.
///
/// ```text
/// [ C ] [ ÷ ] [ × ] [ - ]
/// [ 7 ] [ 8 ] [ 9 ] [ + ]
/// [ 4 ] [ 5 ] [ 6 ] [ = ]
/// [ 1 ] [ 2 ] [ 3 ] [ . ]
/// [         0         ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad from the shared layout.
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_ROWS
            .iter()
            .enumerate()
            .flat_map(|(row, inputs)| {
                inputs
                    .iter()
                    .enumerate()
                    .map(move |(col, &input)| KeypadButtonDef::new(input, row, col))
            })
            .collect();

        Self { buttons }
    }

    /// Returns an iterator over all buttons in layout order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter()
    }

    /// Number of rows in the layout.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.buttons.last().map_or(0, |b| b.row + 1)
    }

    /// Returns the buttons of one row, in column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<&KeypadButtonDef> {
        self.buttons.iter().filter(|b| b.row == row).collect()
    }

    /// Resolves a button element id to its input.
    #[must_use]
    pub fn input_for_id(&self, id: &str) -> Option<Input> {
        self.buttons.iter().find(|b| b.id == id).map(|b| b.input)
    }

    /// Maps a browser `KeyboardEvent.key` value to an input.
    #[must_use]
    pub fn key_to_input(key: &str) -> Option<Input> {
        match key {
            "Enter" => Some(Input::Operator(Operator::Equals)),
            "Escape" | "Delete" => Some(Input::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Input::from_char(c),
                    _ => None,
                }
            }
        }
    }
}
