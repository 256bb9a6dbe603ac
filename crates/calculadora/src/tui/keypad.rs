//! On-screen keypad for the terminal frontend.
//!
//! Renders the shared button layout as a clickable grid. Rows are not all
//! the same width - the zero key spans its whole row, like the page it
//! mirrors - so hit-testing divides each row independently.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Input, Operator, KEYPAD_ROWS};

/// A single keypad button with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The input this button produces.
    pub input: Input,
    /// The printed label.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
}

impl KeypadButton {
    fn new(input: Input) -> Self {
        Self {
            input,
            label: input.legend(),
            pressed: false,
        }
    }
}

/// The keypad: the shared layout plus per-button highlight state.
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let rows = KEYPAD_ROWS
            .iter()
            .map(|row| row.iter().map(|&input| KeypadButton::new(input)).collect())
            .collect();
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by grid position.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns an iterator over all buttons in layout order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Highlights the button that produces `input`, releasing the rest.
    pub fn highlight(&mut self, input: Input) {
        for btn in self.rows.iter_mut().flatten() {
            btn.pressed = btn.input == input;
        }
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for btn in self.rows.iter_mut().flatten() {
            btn.pressed = false;
        }
    }

    /// Converts a click position inside the rendered widget to the input of
    /// the button under it.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Input> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        // Skip the border cells.
        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_w = area.width - 2;
        let inner_h = area.height - 2;
        let row_height = inner_h / self.row_count() as u16;
        if row_height == 0 {
            return None;
        }

        let row_idx = ((rel_y - 1) / row_height) as usize;
        let row = self.rows.get(row_idx)?;
        let btn_width = inner_w / row.len() as u16;
        if btn_width == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        row.get(col).map(|btn| btn.input)
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing the keypad state.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Teclado ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.row_count() as u16;
        if inner.width < 4 || inner.height < rows {
            return;
        }
        let row_height = inner.height / rows;

        for (row_idx, row) in self.keypad.rows.iter().enumerate() {
            let btn_width = inner.width / row.len() as u16;
            if btn_width < 3 {
                continue;
            }
            for (col, btn) in row.iter().enumerate() {
                let x = inner.x + col as u16 * btn_width;
                let y = inner.y + row_idx as u16 * row_height + row_height / 2;

                let style = if btn.pressed {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    match btn.input {
                        Input::Digit(_) | Input::Decimal => Style::default().fg(Color::White),
                        Input::Operator(Operator::Equals) => Style::default().fg(Color::Green),
                        Input::Operator(_) => Style::default().fg(Color::Yellow),
                        Input::Clear => Style::default().fg(Color::Red),
                    }
                };

                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.chars().count() as u16)) / 2;
                if y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
