//! Configuration file handling for runrc
//!
//! A `.runrc` file is a YAML document declaring named command aliases and an
//! optional default runner. The schema is strict: unknown fields are
//! rejected so typos surface as load errors instead of silently ignored
//! settings.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found in current directory or its parents: {0}")]
    ConfigNotFound(PathBuf),
    #[error("Unknown working directory: {0}")]
    UnknownWorkingDirectory(String),
    #[error("Unable to parse config file {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("Unable to write config file {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Duplicate alias in config: {0}")]
    DuplicateAlias(String),
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Executable used to interpret a substituted command string.
///
/// The substituted string is appended after `args`, so `command: bash` with
/// `args: ["-c"]` runs the string as a bash script.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Runner {
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Runner {
    /// The runner used when neither the command entry nor the config
    /// declares one.
    #[must_use]
    pub fn shell() -> Runner {
        Runner {
            command: String::from("bash"),
            args: vec![String::from("-c")],
        }
    }
}

/// A single named command entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CommandEntry {
    pub alias: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<Runner>,
    pub run: String,
}

/// Root configuration structure for runrc
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<Runner>,
    pub commands: Vec<CommandEntry>,
}

/// List of supported configuration file names
const FILENAMES: [&str; 3] = [".runrc", ".runrc.yaml", ".runrc.yml"];

impl Config {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if the file cannot be read, or
    /// `ConfigError::Yaml` if parsing fails.
    pub fn from_file(file: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(file)
            .map_err(|_| ConfigError::ConfigNotFound(file.to_path_buf()))?;
        let config: Config = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Yaml {
            source: e,
            path: file.to_path_buf(),
        })?;
        Ok(config)
    }

    /// Serializes the configuration to a file as YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Yaml` if serialization fails, or
    /// `ConfigError::Io` on write failure.
    pub fn write_to_file(&self, file: &Path) -> Result<(), ConfigError> {
        let contents = serde_yaml::to_string(self).map_err(|e| ConfigError::Yaml {
            source: e,
            path: file.to_path_buf(),
        })?;
        std::fs::write(file, contents).map_err(|e| ConfigError::Io {
            source: e,
            path: file.to_path_buf(),
        })
    }

    /// Searches for a configuration file in the current directory and its
    /// parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownWorkingDirectory` if the cwd cannot be
    /// determined, or `ConfigError::ConfigNotFound` if no config file is
    /// found.
    pub fn find_config() -> Result<PathBuf, ConfigError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::UnknownWorkingDirectory(e.to_string()))?;
        Config::find_config_in(&cwd)
    }

    /// Searches for a configuration file starting at `start` and walking up
    /// through its parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if no config file is found.
    pub fn find_config_in(start: &Path) -> Result<PathBuf, ConfigError> {
        debug!("Searching for config file in {}", start.display());
        let mut path = start.to_path_buf();
        loop {
            for file in &FILENAMES {
                let config_path = path.join(file);
                if config_path.exists() {
                    info!("Found config file: {}", config_path.display());
                    return Ok(config_path);
                }
            }
            if !path.pop() {
                return Err(ConfigError::ConfigNotFound(start.to_path_buf()));
            }
        }
    }
}
