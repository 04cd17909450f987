//! # Configuration Module
//!
//! This module provides configuration support for fix-copyrights, allowing a
//! repository to point the tool at a different source directory or a
//! different set of file suffixes. The header text itself is not
//! configurable.
//!
//! Configuration can be specified in a `.fix-copyrights.toml` file at the
//! repository root, via the `FIX_COPYRIGHTS_CONFIG` environment variable, or
//! with `--config`.
//!
//! ```toml
//! source-dir = "src"
//! extensions = [".h", ".cc"]
//! ```

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::file_filter::DEFAULT_SUFFIXES;
use crate::verbose_log;
use crate::workspace::DEFAULT_SOURCE_DIR;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".fix-copyrights.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "FIX_COPYRIGHTS_CONFIG";

fn default_source_dir() -> PathBuf {
  PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_extensions() -> Vec<String> {
  DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect()
}

/// Main configuration struct for fix-copyrights.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Directory to walk, relative to the repository root.
  #[serde(default = "default_source_dir", rename = "source-dir")]
  pub source_dir: PathBuf,

  /// File name suffixes that receive the header (case-sensitive).
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      source_dir: default_source_dir(),
      extensions: default_extensions(),
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A configuration value is invalid.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: &'static str, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content, path)
  }

  /// Parse configuration from TOML text. `path` is only used for errors.
  pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - The source directory is a non-empty relative path without `..`
  /// - At least one extension is given and none is empty
  fn validate(&self) -> Result<(), ConfigError> {
    if self.source_dir.as_os_str().is_empty() {
      return Err(ConfigError::InvalidValue {
        key: "source-dir",
        message: "must not be empty".to_string(),
      });
    }

    if self
      .source_dir
      .components()
      .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
      return Err(ConfigError::InvalidValue {
        key: "source-dir",
        message: format!(
          "'{}' must be relative to the repository root and stay inside it",
          self.source_dir.display()
        ),
      });
    }

    if self.extensions.is_empty() {
      return Err(ConfigError::InvalidValue {
        key: "extensions",
        message: "at least one extension is required".to_string(),
      });
    }

    if self.extensions.iter().any(String::is_empty) {
      return Err(ConfigError::InvalidValue {
        key: "extensions",
        message: "extensions must not be empty strings".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `FIX_COPYRIGHTS_CONFIG` environment variable
/// 3. `.fix-copyrights.toml` in the repository root
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using repository config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, or return the defaults.
///
/// An explicit `--config` path that cannot be read is an error; a missing
/// discovered file simply means defaults.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Config> {
  if no_config {
    verbose_log!("Config file loading disabled via --no-config");
    return Ok(Config::default());
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => Ok(Config::load(&path)?),
    None => Ok(Config::default()),
  }
}
