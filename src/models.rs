//! Data structures for recipetui
//!
//! A single entity: the [`Recipe`] as served by the recipes endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Recipe
// =============================================================================

/// A recipe as returned by the recipes endpoint.
///
/// The server uses capitalized keys (`Name`, `Time`, ...); lower-case keys
/// are accepted too. `time` is free-form display text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Time", alias = "time")]
    pub time: String,
    #[serde(rename = "Ingredients", alias = "ingredients", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "Steps", alias = "steps", default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Builder-style ingredient list
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style step list
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Picker key: `"name (time)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.time)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.time)
    }
}
