//! User configuration for the agenda CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration at ~/.config/agenda/config.toml
#[derive(Deserialize, Clone)]
pub struct Config {
    /// Base URL of the portal API, e.g. "https://portal.example.edu/api".
    pub base_url: String,
    /// User id used to scope event queries.
    pub user_id: u64,
    /// Optional bearer token forwarded to the API.
    pub token: Option<String>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("agenda");
        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "No config found at {}.\n\nCreate it with:\n  \
                base_url = \"https://portal.example.edu/api\"\n  \
                user_id = 1",
                path.display()
            )
        })?;
        toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }
}
