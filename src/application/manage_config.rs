//! Config management use case

use crate::error::{JournaliError, Result};
use crate::infrastructure::{Config, ThemeMode};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for reading and modifying the configuration file
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Create a config service over the default config directory
    pub fn discover() -> Result<Self> {
        Ok(ConfigService {
            config_dir: Config::default_dir()?,
        })
    }

    /// Create a config service over a specific directory
    pub fn new(config_dir: PathBuf) -> Self {
        ConfigService { config_dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.config_dir)?;

        match key {
            "theme" => Ok(format!("{:?}", config.theme).to_lowercase()),
            "splash" => Ok(config.splash.to_string()),
            _ => Err(JournaliError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: theme, splash",
                key
            ))),
        }
    }

    /// Set a config value and save the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.config_dir)?;

        match key {
            "theme" => {
                config.theme = ThemeMode::from_str(value).map_err(JournaliError::Config)?;
            }
            "splash" => {
                config.splash = value.parse().map_err(|_| {
                    JournaliError::Config(format!(
                        "Invalid splash value: '{}'. Valid values are: true, false",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(JournaliError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: theme, splash",
                    key
                )));
            }
        }

        config.save_to_dir(&self.config_dir)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.config_dir)
    }
}
