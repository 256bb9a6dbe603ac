//! Calculadora entry point.
//!
//! Runs the terminal calculator by default; `export` writes the static
//! browser build instead.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use calculadora::config::SiteConfig;
use calculadora::export;
use calculadora::tui::{self, CalculatorApp, InputHandler, KeyAction};

#[derive(Debug, Parser)]
#[command(name = "calculadora", version, about = "Four-function accumulator calculator")]
struct Cli {
    /// Site configuration file (TOML).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the static browser build to an output directory.
    Export {
        /// Output directory.
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Path prefix the site will be served under.
        #[arg(long, value_name = "PREFIX")]
        base_path: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    }
    .with_env_overrides();

    match cli.command {
        Some(Command::Export { out, base_path }) => {
            let config = SiteConfig {
                base_path: base_path.unwrap_or(config.base_path),
                ..config
            };
            let index = export::write_site(&config, &out)?;
            println!("{}", index.display());
            Ok(())
        }
        None => run_tui(&config),
    }
}

fn run_tui(config: &SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &SiteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| tui::render(&app, f, &config.title))?;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Press(input) => app.press(input),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let [_, keypad_area, _] = tui::layout(area);
                    if let Some(input) = app.keypad().hit_test(keypad_area, mouse.column, mouse.row)
                    {
                        app.press(input);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
