//! recipetui - fuzzy-find recipes and read them in your terminal
//!
//! # Usage
//!
//! ```bash
//! # Pick recipes, read them in a scrollable viewport
//! recipetui
//!
//! # Pick recipes, print them when the picker closes
//! recipetui --plain
//!
//! # Scripting
//! recipetui list --json
//! recipetui show chili
//! ```

use std::fs::File;
use std::io::{stderr, Stderr};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use recipetui::cli::{Cli, Command, ExitCode, Output};
use recipetui::commands;
use recipetui::config::{Config, LOG_ENV};
use recipetui::{App, DisplayMode, Outcome, RecipeClient};

/// Terminal drawn on stderr; stdout only carries printed recipes
type Tui = Terminal<CrosstermBackend<Stderr>>;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let output = Output::new(&cli);

    let config = match &cli.config {
        Some(path) if !path.exists() => {
            return output
                .error(
                    format!("Config file not found: {}", path.display()),
                    ExitCode::InvalidArgs,
                )
                .into();
        }
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    init_logging(&config);

    let url = config.endpoint(cli.url.as_deref());
    log::info!("recipetui starting, endpoint {}", url);
    let client = match config.timeout() {
        Some(timeout) => RecipeClient::with_timeout(url, timeout),
        None => RecipeClient::new(url),
    };

    let mode = if cli.plain {
        DisplayMode::Print
    } else {
        DisplayMode::Viewport
    };
    let preview = !cli.no_preview && config.show_preview();

    let code = match cli.command {
        Some(Command::List(cmd)) => commands::list_cmd(cmd, &client, &output).await,
        Some(Command::Show(cmd)) => commands::show_cmd(cmd, &client, &output).await,
        None => run_picker(&client, &output, mode, preview).await,
    };

    log::info!("exiting with {:?}", code);
    code.into()
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging(config: &Config) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let Some(path) = config.log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

// =============================================================================
// Picker Mode
// =============================================================================

/// Fetch, pick, then view or print the accepted recipes
async fn run_picker(
    client: &RecipeClient,
    output: &Output,
    mode: DisplayMode,
    preview: bool,
) -> ExitCode {
    let recipes = match commands::fetch(client, output).await {
        Ok(recipes) => recipes,
        Err(code) => return code,
    };

    if recipes.is_empty() {
        output.info("No recipes available");
        return ExitCode::Success;
    }

    let mut app = App::new(recipes).with_mode(mode).with_preview(preview);

    if let Err(e) = run_tui(&mut app) {
        return output.error(format!("Terminal error: {}", e), ExitCode::Error);
    }

    match app.outcome() {
        Outcome::Aborted => ExitCode::Aborted,
        Outcome::Selected(_) if mode == DisplayMode::Print => {
            match commands::print_recipes(&app.selected_recipes(), output.color) {
                Ok(()) => ExitCode::Success,
                Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
            }
        }
        Outcome::Selected(_) | Outcome::Running => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive session until the app stops
fn run_tui(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, app);

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (ignore releases on Windows)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
