//! Recipes endpoint client
//!
//! One GET against the configured URL, decoded as a JSON array of recipes.

use std::time::Duration;

use thiserror::Error;

use crate::models::Recipe;

/// Recipes API error types
#[derive(Error, Debug)]
pub enum RecipeApiError {
    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl RecipeApiError {
    /// Whether the failure happened before a usable response arrived
    pub fn is_network(&self) -> bool {
        matches!(self, RecipeApiError::Request(_) | RecipeApiError::Status(_))
    }
}

/// Recipes API client
pub struct RecipeClient {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl RecipeClient {
    /// Create a client for the given endpoint URL. Requests never time out.
    pub fn new(url: impl Into<String>) -> Self {
        Self::build(url.into(), None)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self::build(url.into(), Some(timeout))
    }

    fn build(url: String, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            url,
            timeout,
            client: builder.build().unwrap_or_default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Fetch every recipe, preserving server order
    pub async fn fetch_all(&self) -> Result<Vec<Recipe>, RecipeApiError> {
        log::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("recipes endpoint answered {}", status);
            return Err(RecipeApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let recipes = decode_recipes(&body)?;
        log::info!("fetched {} recipes from {}", recipes.len(), self.url);
        Ok(recipes)
    }
}

/// Decode a response body into recipes
pub fn decode_recipes(body: &str) -> Result<Vec<Recipe>, RecipeApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("could not decode recipes: {}", e);
        RecipeApiError::InvalidResponse(format!("JSON parse error: {}", e))
    })
}
