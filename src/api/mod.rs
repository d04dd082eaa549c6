//! API clients for external services
//!
//! - recipes: the remote recipe list endpoint

pub mod recipes;

pub use recipes::{RecipeApiError, RecipeClient};
