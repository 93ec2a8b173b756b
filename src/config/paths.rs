//! Path resolution for todotxt configuration and data files.
//!
//! All todotxt data is stored in `~/.todotxt/`:
//! - `config.yaml` - Main configuration file
//! - `todo.txt` - Default task file

use std::path::PathBuf;

use crate::error::TodoError;

/// Paths to todotxt configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.todotxt/`
    pub root: PathBuf,
    /// Config file: `~/.todotxt/config.yaml`
    pub config_file: PathBuf,
    /// Task file: `~/.todotxt/todo.txt`
    pub todo_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TodoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".todotxt")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            todo_file: root.join("todo.txt"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".todotxt")))
    }
}
