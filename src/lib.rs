//! Core implementation of the runrc command runner
//!
//! Runrc reads a per-directory `.runrc` file declaring named command
//! aliases, each a script template plus an optional runner/interpreter. One
//! alias is resolved per invocation: the user's arguments are substituted
//! into the entry's `run` template (see [`template`]) and the result is
//! handed to the runner as its final argument, `bash -c <script>` by
//! default.

use std::collections::HashSet;
use std::path::PathBuf;

use log::debug;

use crate::config_file::{Config, ConfigError};

pub mod config_file;
pub mod init;
pub mod list;
pub mod logger;
pub mod run;
pub mod template;

/// Load configuration from a file (or auto-detect), returning the validated
/// `Config` and the directory containing it.
///
/// # Errors
///
/// Returns `ConfigError` if the config file is not found, cannot be parsed,
/// or contains invalid values.
pub fn load_config(config_file: Option<&str>) -> Result<(Config, PathBuf), ConfigError> {
    let config_path = match config_file {
        Some(file) => {
            let config_path = PathBuf::from(file);
            if !config_path.exists() {
                return Err(ConfigError::ConfigNotFound(config_path));
            }
            config_path
        }
        None => Config::find_config()?,
    };
    // parent() of a bare relative filename is the empty path, which is not
    // a usable working directory for spawned commands.
    let cwd = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    debug!("Loading config file: {}", config_path.display());
    let config = Config::from_file(&config_path)?;
    validate(&config)?;
    Ok((config, cwd))
}

/// Validate the config for duplicate aliases and empty values
fn validate(config: &Config) -> Result<(), ConfigError> {
    check_duplicates(config)?;
    check_empty_fields(config)?;
    check_runners(config)?;
    Ok(())
}

fn check_duplicates(config: &Config) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in &config.commands {
        if !seen.insert(entry.alias.as_str()) {
            return Err(ConfigError::DuplicateAlias(entry.alias.clone()));
        }
    }
    Ok(())
}

fn check_empty_fields(config: &Config) -> Result<(), ConfigError> {
    for entry in &config.commands {
        if entry.alias.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command '{}' has an empty alias",
                entry.name
            )));
        }
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command with alias '{}' has an empty name",
                entry.alias
            )));
        }
        if entry.run.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Command '{}' has an empty run string",
                entry.alias
            )));
        }
    }
    Ok(())
}

fn check_runners(config: &Config) -> Result<(), ConfigError> {
    let runners = config
        .runner
        .iter()
        .chain(config.commands.iter().filter_map(|e| e.runner.as_ref()));
    for runner in runners {
        if runner.command.trim().is_empty() {
            return Err(ConfigError::Validation(String::from(
                "Runner has an empty command",
            )));
        }
    }
    Ok(())
}
