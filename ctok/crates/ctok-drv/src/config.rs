//! Configuration module for the ctok driver.
//!
//! Settings come from three layers: built-in defaults, an optional
//! `ctok.toml` file, and command-line flags. Later layers win.

use std::path::{Path, PathBuf};

use ctok_lex::LexerConfig;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};
use crate::output::OutputFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ctok.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print a token summary to stderr after the run.
    #[serde(default)]
    pub stats: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/ctok/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist, cannot be read, or is not valid
    /// TOML for this structure.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DrvError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DrvError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        self.lexer
            .validate()
            .map_err(|e| DrvError::Config(format!("[lexer] {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ctok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ctok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
