//! Configuration management for mergepilot

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::split_git_program;
use crate::paths;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Git settings
    #[serde(default)]
    pub git: GitConfig,

    /// Poll interval in milliseconds for the terminal event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

/// Settings for running git
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitConfig {
    /// Command line used to run git (e.g., "git" or "git -c core.editor=vim")
    #[serde(default = "default_program")]
    pub program: String,

    /// Merge settings
    #[serde(default)]
    pub merging: MergingConfig,
}

/// Settings applied while a merge is in progress
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergingConfig {
    /// Let git open an editor for the merge commit message on continue
    #[serde(default)]
    pub manual_commit: bool,
}

fn default_program() -> String {
    "git".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            merging: MergingConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git: GitConfig::default(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl GitConfig {
    /// Split the configured git command line into an argv vector
    ///
    /// # Errors
    ///
    /// Returns an error if the command line is empty, malformed, or starts
    /// with an option instead of an executable
    pub fn program_argv(&self) -> Result<Vec<String>> {
        split_git_program(&self.program)
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.git.program_argv()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mergepilot")
            .join("config.json")
    }
}
