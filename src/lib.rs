//! recipetui - fuzzy-find recipes and read them in your terminal
//!
//! Fetches the recipe list from a remote endpoint, lets the user fuzzy-search
//! and multi-select recipes by name, and renders ingredients and steps.
//!
//! # Modules
//!
//! - `models` - The recipe record
//! - `api` - Recipes endpoint client
//! - `config` - Config file and endpoint resolution
//! - `ui` - Picker, recipe rendering, viewport and plain output
//! - `app` - Application state and key handling
//! - `cli` / `commands` - Command line surface

pub mod models;
pub mod api;
pub mod config;
pub mod ui;
pub mod app;
pub mod cli;
pub mod commands;

// Re-export commonly used types
pub use models::Recipe;
pub use api::{RecipeApiError, RecipeClient};
pub use app::{App, AppState, DisplayMode, Outcome};
pub use config::Config;
