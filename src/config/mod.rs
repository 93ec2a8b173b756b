//! Configuration management for todotxt.
//!
//! This module handles loading and saving configuration from `~/.todotxt/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AddConfig, ColorSetting, Config, GeneralConfig, ListConfig};
