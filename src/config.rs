//! Configuration
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, `config.toml` in the user's config directory, and
//! environment variables (`RECIPEBOX_SOURCE`). The CLI `--source` flag is
//! applied on top by the caller.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::RecipeSource;

pub const DEFAULT_SOURCE: &str = "recipes.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const SOURCE_ENV: &str = "RECIPEBOX_SOURCE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path or URL of the recipe document.
    pub source: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_file() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Ok(source) = env::var(SOURCE_ENV) {
            info!("{SOURCE_ENV} set, using source: {source}");
            config.source = source;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn recipe_source(&self) -> RecipeSource {
        RecipeSource::parse(&self.source)
    }

    /// Log file location: the configured one, else the data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            let dir = dirs::data_dir().map(|d| d.join("recipebox"));
            if dir.is_none() {
                warn!("No data directory available, logging disabled");
            }
            dir.map(|d| d.join("recipebox.log"))
        })
    }
}

fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("recipebox").join("config.toml"))
}
