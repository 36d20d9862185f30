//! Configuration management

use crate::error::{JournaliError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Color theme selection, consumed only by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(format!(
                "Invalid theme: '{}'. Valid themes are: dark, light",
                s
            )),
        }
    }
}

/// Process-wide configuration, stored as TOML.
///
/// A missing config file is not an error; every field has a default and
/// partial files deserialize against those defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_splash")]
    pub splash: bool,
}

fn default_splash() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeMode::Dark,
            splash: true,
        }
    }
}

impl Config {
    /// Resolve the config directory: `JOURNALI_CONFIG_DIR` when set,
    /// otherwise the platform config location (~/.config/journali on
    /// Linux).
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("JOURNALI_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        ProjectDirs::from("", "", "journali")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                JournaliError::Config("Could not determine a config directory".to_string())
            })
    }

    /// Load config from config.toml in the given directory. A missing
    /// file yields the defaults; a malformed file is a config error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", config_path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(JournaliError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            JournaliError::Config(format!("Failed to parse {}: {}", config_path.display(), e))
        })
    }

    /// Save config to config.toml in the given directory, creating the
    /// directory if needed.
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let config_path = dir.join("config.toml");

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Load config from the default directory.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::default_dir()?)
    }
}
