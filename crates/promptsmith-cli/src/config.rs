//! Configuration management for promptsmith CLI
//!
//! Stores the default output format and engine overrides in
//! ~/.config/promptsmith/config.toml

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use promptsmith::RefinerConfig;
use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = "promptsmith";
const CONFIG_FILE: &str = "config.toml";

/// How `refine` prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,
    /// Colored human-readable report
    Summary,
}

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub engine: RefinerConfig,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path, honoring an explicit override
    pub fn config_path(custom: Option<&Path>) -> Result<PathBuf> {
        match custom {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Self::config_dir()?.join(CONFIG_FILE)),
        }
    }

    /// Load config from the default or overridden location
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        Self::load_from(&Self::config_path(custom)?)
    }

    /// Load config from file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }

    /// Save config to file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = self.to_toml()?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
