//! CLI - Command Line Interface for recipetui
//!
//! Run without a subcommand to pick recipes interactively. The `list` and
//! `show` subcommands are scriptable and never touch the alternate screen.
//!
//! # Examples
//!
//! ```bash
//! # Pick recipes, read them in a scrollable viewport
//! recipetui
//!
//! # Pick recipes, print them to stdout
//! recipetui --plain
//!
//! # Scripting
//! recipetui list --json
//! recipetui show chili "banana bread"
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// The recipes endpoint could not be reached or answered non-2xx
    NetworkError = 3,
    /// A query matched no recipe
    NoMatch = 4,
    /// The recipes endpoint answered with something other than recipes
    InvalidResponse = 5,
    /// Picker dismissed without a selection
    Aborted = 130,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// recipetui - fuzzy-find recipes and read them in your terminal
///
/// Run without arguments to launch the interactive picker.
#[derive(Parser, Debug)]
#[command(
    name = "recipetui",
    version,
    about = "Fuzzy-find recipes and read them in your terminal",
    long_about = "Fetches the recipe list, lets you fuzzy-search and multi-select \
                  recipes by name, and shows their ingredients and steps.\n\n\
                  TAB marks a recipe, ENTER opens the marked recipes \
                  (or the one under the cursor), ESC quits.",
    after_help = "EXAMPLES:\n\
                  recipetui                      Pick recipes and view them\n\
                  recipetui --plain              Pick recipes and print them\n\
                  recipetui list --json          Dump every recipe as JSON\n\
                  recipetui show chili           Print the best match for \"chili\""
)]
pub struct Cli {
    /// Recipes endpoint URL (overrides RECIPES_URL and the config file)
    #[arg(long, short = 'u', global = true)]
    pub url: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON (default for `list` when stdout is piped)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Print accepted recipes to stdout instead of opening the viewport
    #[arg(long, short = 'p')]
    pub plain: bool,

    /// Hide the preview pane in the picker
    #[arg(long)]
    pub no_preview: bool,

    /// Subcommand to run (omit for the interactive picker)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if JSON output should be used. `list` defaults to JSON when
    /// stdout is piped; everything else only on `--json`.
    pub fn should_json(&self) -> bool {
        self.should_json_with(std::io::stdout().is_terminal())
    }

    fn should_json_with(&self, stdout_is_tty: bool) -> bool {
        self.json || (matches!(self.command, Some(Command::List(_))) && !stdout_is_tty)
    }

    /// Check if styled output should be used
    pub fn should_color(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recipe labels
    #[command(visible_alias = "ls")]
    List(ListCmd),

    /// Print the best-matching recipe for each query
    #[command(visible_alias = "s")]
    Show(ShowCmd),
}

/// List every recipe, optionally filtered by a fuzzy query
#[derive(Args, Debug)]
pub struct ListCmd {
    /// Only list recipes matching this fuzzy query
    #[arg(long, short = 'Q')]
    pub query: Option<String>,
}

/// Print recipes resolved by fuzzy query
#[derive(Args, Debug)]
pub struct ShowCmd {
    /// One or more fuzzy queries; each prints its best match
    #[arg(required = true)]
    pub queries: Vec<String>,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

impl JsonOutput<()> {
    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
    pub color: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
            color: cli.should_color(),
        }
    }

    /// Print success data as JSON
    pub fn print_json<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print error and return exit code. Errors are fatal, so `quiet`
    /// never hides them.
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        log::error!("{}", msg);
        eprintln!("{}", self.format_error(&msg, code));
        code
    }

    /// Error text as written to stderr
    pub fn format_error(&self, msg: &str, code: ExitCode) -> String {
        if self.json {
            let output = JsonOutput::error_msg(msg, code);
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| format!("Error: {}", msg))
        } else {
            format!("Error: {}", msg)
        }
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
