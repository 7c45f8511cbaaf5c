//! Alias execution
//!
//! Resolves an alias against the loaded config, substitutes the invocation
//! arguments into the entry's `run` template, and hands the result to the
//! configured runner as its final argument.

use std::path::Path;
use std::process::Command as ProcessCommand;

use log::debug;
use thiserror::Error;

use crate::config_file::{CommandEntry, Config, Runner};
use crate::template::substitute;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Command '{alias}' not found. Available commands: {available}")]
    UnknownAlias { alias: String, available: String },
    #[error("Failed to spawn runner '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

/// Build the script for one entry by substituting the argument vector into
/// its `run` template. Index 0 is the alias itself, user arguments follow.
#[must_use]
pub fn build_script(entry: &CommandEntry, alias: &str, args: &[String]) -> String {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(alias.to_string());
    argv.extend_from_slice(args);
    substitute(&entry.run, argv.as_slice())
}

/// Pick the runner for an entry: its own, the config default, or `bash -c`.
#[must_use]
pub fn runner_for(config: &Config, entry: &CommandEntry) -> Runner {
    entry
        .runner
        .as_ref()
        .or(config.runner.as_ref())
        .cloned()
        .unwrap_or_else(Runner::shell)
}

/// Run the command registered under `alias` in `cwd` (the directory the
/// config file was found in), returning the child's exit code.
///
/// The child inherits stdio; a signal-terminated child reports exit code 1.
///
/// # Errors
///
/// Returns `RunError::UnknownAlias` if no command entry matches, or
/// `RunError::Spawn` if the runner executable cannot be started.
pub fn run(config: &Config, cwd: &Path, alias: &str, args: &[String]) -> Result<i32, RunError> {
    let entry = config
        .commands
        .iter()
        .find(|entry| entry.alias == alias)
        .ok_or_else(|| RunError::UnknownAlias {
            alias: alias.to_string(),
            available: config
                .commands
                .iter()
                .map(|entry| entry.alias.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let runner = runner_for(config, entry);
    let script = build_script(entry, alias, args);
    debug!("Running '{alias}' via '{}': {script}", runner.command);

    let status = ProcessCommand::new(&runner.command)
        .args(&runner.args)
        .arg(&script)
        .current_dir(cwd)
        .status()
        .map_err(|e| RunError::Spawn {
            command: runner.command.clone(),
            source: e,
        })?;

    Ok(status.code().unwrap_or(1))
}
