//! Configuration management for recipetui
//!
//! Handles config file loading and endpoint resolution.
//! Config is stored at ~/.config/recipetui/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Built-in recipes endpoint
pub const DEFAULT_URL: &str = "https://r-j-magenta-carrot-42069.uc.r.appspot.com/recipes/all";

/// Environment variable overriding the endpoint
pub const URL_ENV: &str = "RECIPES_URL";

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "RECIPETUI_LOG";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recipes endpoint URL
    pub url: Option<String>,
    /// HTTP request timeout in seconds (none unless set)
    pub timeout_secs: Option<u64>,
    /// Show the preview pane in the picker
    pub preview: Option<bool>,
    /// Log file location
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/recipetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recipetui").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path().map(|p| Self::load_from(&p)).unwrap_or_default()
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|e| {
                log::warn!("ignoring unparsable config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Resolve the endpoint URL with fallback chain:
    /// 1. Explicit override (the `--url` flag)
    /// 2. Environment variable RECIPES_URL
    /// 3. Config file `url`
    /// 4. Built-in default
    pub fn endpoint(&self, flag: Option<&str>) -> String {
        self.endpoint_with_env(flag, std::env::var(URL_ENV).ok())
    }

    fn endpoint_with_env(&self, flag: Option<&str>, env: Option<String>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }

        if let Some(url) = env.filter(|u| !u.is_empty()) {
            return url;
        }

        self.url.clone().unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    /// Request timeout, only when the config file sets one
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn show_preview(&self) -> bool {
        self.preview.unwrap_or(true)
    }

    /// Log file location: config value, else the platform cache dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|p| p.join("recipetui").join("recipetui.log"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.url.is_none());
        assert!(config.show_preview());
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_endpoint_flag_wins() {
        let config = Config {
            url: Some("http://config".into()),
            ..Config::default()
        };
        let url = config.endpoint_with_env(Some("http://flag"), Some("http://env".into()));
        assert_eq!(url, "http://flag");
    }

    #[test]
    fn test_endpoint_env_before_config() {
        let config = Config {
            url: Some("http://config".into()),
            ..Config::default()
        };
        assert_eq!(
            config.endpoint_with_env(None, Some("http://env".into())),
            "http://env"
        );
        // Empty env var is ignored
        assert_eq!(
            config.endpoint_with_env(None, Some(String::new())),
            "http://config"
        );
    }

    #[test]
    fn test_endpoint_default() {
        let config = Config::default();
        assert_eq!(config.endpoint_with_env(None, None), DEFAULT_URL);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "url = \"http://localhost:8080/recipes/all\"\ntimeout_secs = 5\npreview = false"
        )
        .unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.url.as_deref(), Some("http://localhost:8080/recipes/all"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert!(!config.show_preview());
    }

    #[test]
    fn test_load_from_garbage_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();

        assert_eq!(Config::load_from(file.path()), Config::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let config = Config::load_from(Path::new("/nonexistent/recipetui.toml"));
        assert_eq!(config, Config::default());
    }
}
