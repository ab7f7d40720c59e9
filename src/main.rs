//! tcalc - Terminal Calculator
//!
//! A keypad-style calculator for the terminal. Expressions use calculator
//! notation (×, ÷, −, ^, %, π, √) and the last twenty results are kept in a
//! history panel for the lifetime of the process.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use tcalc::application::{App, AppMode, CalculatorService};
use tcalc::config::Cli;
use tcalc::domain::HistoryLedger;
use tcalc::infrastructure::logging;
use tcalc::presentation::{render_ui, InputHandler};

/// Entry point for the tcalc terminal calculator.
///
/// With `--eval` a single expression is evaluated and printed; otherwise the
/// interactive calculator runs until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails.
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log_target(), &cli.log_level).context("failed to initialise logging")?;

    let service = CalculatorService::new(Arc::new(HistoryLedger::new()));

    if let Some(expression) = &cli.eval {
        return run_once(&service, expression, cli.json);
    }

    info!("starting interactive calculator");
    run_interactive(service)?;
    Ok(ExitCode::SUCCESS)
}

/// Evaluates one expression and prints the response.
fn run_once(service: &CalculatorService, expression: &str, json: bool) -> anyhow::Result<ExitCode> {
    let response = service.calculate(expression);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if let Some(error) = &response.error {
        eprintln!("{}: {}", response.result, error);
    } else {
        println!("{}", response.result);
    }

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_interactive(service: CalculatorService) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("terminal error")
}

/// Main application event loop.
///
/// Continues running until the user presses 'q' in keypad mode or Ctrl+C.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
