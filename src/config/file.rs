//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/leafutils/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [size]
//! units = "si"
//! precision = 2
//!
//! [du]
//! dir = "~/Downloads"
//!
//! [exec]
//! shell = "sh"
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::size::Units;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Size formatting options
    #[serde(default)]
    pub size: FileSizeConfig,

    /// Directory size options
    #[serde(default)]
    pub du: FileDuConfig,

    /// Command execution options
    #[serde(default)]
    pub exec: FileExecConfig,
}

/// Size formatting options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileSizeConfig {
    /// Unit system (`"iec"` or `"si"`)
    pub units: Option<Units>,

    /// Digits after the decimal point
    pub precision: Option<usize>,
}

/// Directory size options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileDuConfig {
    /// Directory measured when none is given on the command line
    pub dir: Option<PathBuf>,
}

/// Command execution options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileExecConfig {
    /// Shell used to run commands (defaults to `bash`)
    pub shell: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use leafutils::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/leafutils/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("leafutils").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected values
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
