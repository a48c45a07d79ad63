//! User configuration.
//!
//! Stored as TOML at `~/.config/asciiart/config.toml`. A missing file yields
//! the defaults; unknown sections are ignored and missing fields fall back
//! per-field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::banner::Style;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
}

/// Banner selection configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Style used when the command line does not name one.
    #[serde(default)]
    pub default_style: Style,
    /// Directory holding banner files. The shipped `banners/` directory is
    /// used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Get the config file path (~/.config/asciiart/config.toml).
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/asciiart).
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("asciiart"))
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}
