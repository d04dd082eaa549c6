//! Terminal UI components
//!
//! Built with ratatui on a Catppuccin Mocha palette.
//! Keyboard-first navigation throughout.

pub mod theme;
pub mod search;
pub mod picker;
pub mod recipe;
pub mod viewport;
pub mod plain;

pub use theme::Theme;
