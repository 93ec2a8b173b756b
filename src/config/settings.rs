//! Configuration settings for todotxt.
//!
//! Settings are loaded from `~/.todotxt/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TodoError;
use crate::list::SortKey;
use crate::task::FormatOptions;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Canonical line rendering.
    pub format: FormatOptions,
    /// Settings for `ls`.
    pub list: ListConfig,
    /// Settings for `add`.
    pub add: AddConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Task file used when neither `--file` nor `TODO_FILE` is given.
    #[serde(default)]
    pub todo_file: Option<PathBuf>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListConfig {
    /// Sort keys applied when `ls` is run without `--sort`, e.g. `["priority", "-due"]`.
    pub default_sort: Vec<String>,
}

/// Settings for adding tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddConfig {
    /// Stamp today's date on added tasks that have no created date.
    #[serde(default = "default_true")]
    pub auto_created_date: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            todo_file: None,
        }
    }
}

impl Default for AddConfig {
    fn default() -> Self {
        Self {
            auto_created_date: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TodoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Parsed `list.default_sort` keys.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Config` naming the first key that does not parse.
    pub fn default_sort_keys(&self) -> Result<Vec<SortKey>, TodoError> {
        self.list
            .default_sort
            .iter()
            .map(|key| {
                key.parse()
                    .map_err(|e| TodoError::Config(format!("list.default_sort: {e}")))
            })
            .collect()
    }

    /// The task file to use.
    ///
    /// An explicit path wins, then `general.todo_file`, then the default file
    /// under `paths`.
    #[must_use]
    pub fn todo_file(&self, explicit: Option<&Path>, paths: &Paths) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.general.todo_file.clone())
            .unwrap_or_else(|| paths.todo_file.clone())
    }
}
