//! Terminal rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Help line shown under the keypad.
pub const HELP: &str = " 0-9 .  + - * / =  Enter=  Esc C  q salir ";

/// Splits the screen into readout, keypad, and help areas. The event loop
/// uses the same split to hit-test mouse clicks against the keypad.
#[must_use]
pub fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Readout
            Constraint::Min(11),    // Keypad
            Constraint::Length(1),  // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Renders the calculator UI to the frame. The window title comes from the
/// site configuration.
pub fn render(app: &CalculatorApp, frame: &mut Frame, title: &str) {
    frame.render_widget(CalculatorUI::new(app, title), frame.area());
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    title: &'a str,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a widget borrowing the app state and the window title.
    #[must_use]
    pub fn new(app: &'a CalculatorApp, title: &'a str) -> Self {
        Self { app, title }
    }

    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let readout = Paragraph::new(Span::styled(
            self.app.display().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Pantalla ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        readout.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [readout, keypad, help] = layout(area);
        self.render_readout(readout, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        self.render_help(help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Input, Operator};

    fn rendered(app: &CalculatorApp, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(app, "Calculadora").render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_layout_has_three_areas() {
        let [readout, keypad, help] = layout(Rect::new(0, 0, 40, 22));
        assert_eq!(readout.height, 3);
        assert!(keypad.height >= 11);
        assert_eq!(help.height, 1);
        assert!(readout.y < keypad.y && keypad.y < help.y);
    }

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = rendered(&app, 40, 22);
        assert!(content.contains("Calculadora"));
        assert!(content.contains("Pantalla"));
        assert!(content.contains("Teclado"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_shows_result() {
        let mut app = CalculatorApp::new();
        for input in [
            Input::Digit(6),
            Input::Operator(Operator::Multiply),
            Input::Digit(7),
            Input::Operator(Operator::Equals),
        ] {
            app.press(input);
        }
        let content = rendered(&app, 40, 22);
        assert!(content.contains("42"));
    }

    #[test]
    fn test_render_tiny_area_does_not_panic() {
        let app = CalculatorApp::new();
        let _ = rendered(&app, 10, 5);
    }

    #[test]
    fn test_configured_title_is_rendered() {
        let app = CalculatorApp::new();
        let area = Rect::new(0, 0, 40, 22);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(&app, "Mi Calculadora").render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Mi Calculadora"));
    }
}
