//! Creation of a default `.runrc` file

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config_file::{CommandEntry, Config, ConfigError, Runner};

#[derive(Error, Debug)]
pub enum InitError {
    #[error(".runrc file already exists at {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),

    #[error("failed to write config: {0}")]
    Config(#[from] ConfigError),
}

const HELLO_COMMAND: &str = r#"NAME=$(echo {1..})
if [[ "$NAME" == "" ]]; then
  echo "No name provided"
  exit 1
fi

echo "Hello $NAME!"
"#;

const NODE_HELLO_COMMAND: &str = r#"const NAME = `{1..}`.replaceAll("\"", "");

if (!NAME) {
  console.log("No name provided");
  process.exit(1);
}

console.log(`Hello ${NAME}!`);
"#;

fn default_config() -> Config {
    Config {
        runner: None,
        commands: vec![
            CommandEntry {
                alias: String::from("hello"),
                name: String::from("Say Hello"),
                runner: None,
                run: String::from(HELLO_COMMAND),
            },
            CommandEntry {
                alias: String::from("node-hello"),
                name: String::from("Say Hello (Node)"),
                runner: Some(Runner {
                    command: String::from("node"),
                    args: vec![String::from("-e")],
                }),
                run: String::from(NODE_HELLO_COMMAND),
            },
        ],
    }
}

/// Write a default `.runrc` into `directory`.
///
/// # Errors
///
/// Returns `InitError::ConfigExists` if a `.runrc` already exists (unless
/// `force` is set), or `InitError::Config` on write failure.
pub fn run(directory: &Path, force: bool) -> Result<PathBuf, InitError> {
    let config_path = directory.join(".runrc");
    if config_path.exists() && !force {
        return Err(InitError::ConfigExists(config_path));
    }

    default_config().write_to_file(&config_path)?;
    info!("Created .runrc file in {}", directory.display());
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = run(dir.path(), false).unwrap();
        assert_eq!(path, dir.path().join(".runrc"));
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.commands.len(), 2);
        assert_eq!(config.commands[0].alias, "hello");
        assert_eq!(config.commands[1].alias, "node-hello");
        assert_eq!(config.commands[1].runner.as_ref().unwrap().command, "node");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).unwrap();
        let result = run(dir.path(), false);
        assert!(matches!(result, Err(InitError::ConfigExists(_))));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".runrc"), "not yaml at all {{{").unwrap();
        run(dir.path(), true).unwrap();
        assert!(Config::from_file(&dir.path().join(".runrc")).is_ok());
    }
}
