//! Configuration file and first-launch preferences.

use crate::session::DEFAULT_ERROR_DISPLAY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "pocketcalc";

/// User settings read from `config.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds an error stays on screen before it is cleared.
    pub error_display_ms: u64,
    /// Save the calculator on exit and restore it on start.
    pub persist_state: bool,
    /// Tint the display red while an error is shown.
    pub color: bool,
    /// Show the gesture tutorial on first launch.
    pub show_tutorial: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_display_ms: DEFAULT_ERROR_DISPLAY.as_millis() as u64,
            persist_state: true,
            color: true,
            show_tutorial: true,
        }
    }
}

impl Config {
    /// `~/.config/pocketcalc/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }
}

/// Directory for state and preference files.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME))
}

/// Small persisted flags that are not user settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub first_launch: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { first_launch: true }
    }
}

impl Preferences {
    pub fn default_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("prefs.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string(self).context("Failed to serialize preferences")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write preferences {}", path.display()))
    }
}
