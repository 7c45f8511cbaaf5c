use std::path::Path;

use runrc::config_file::ConfigError;
use runrc::load_config;

fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join(".runrc"), content).unwrap();
}

fn load(dir: &Path) -> (runrc::config_file::Config, std::path::PathBuf) {
    let path = dir.join(".runrc").to_string_lossy().to_string();
    load_config(Some(&path)).unwrap()
}

#[test]
fn test_load_config_minimal() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r"
commands:
  - alias: hello
    name: Say Hello
    run: echo hello
",
    );
    let (config, cwd) = load(dir.path());
    assert_eq!(config.commands.len(), 1);
    assert_eq!(config.commands[0].alias, "hello");
    assert_eq!(cwd, dir.path());
}

#[test]
fn test_load_config_duplicate_aliases() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r"
commands:
  - alias: dup
    name: First
    run: echo one
  - alias: dup
    name: Second
    run: echo two
",
    );
    let path = dir.path().join(".runrc").to_string_lossy().to_string();
    let result = load_config(Some(&path));
    assert!(matches!(result, Err(ConfigError::DuplicateAlias(_))));
}

#[test]
fn test_run_command_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
runner:
  command: sh
  args: ["-c"]
commands:
  - alias: write
    name: Write arguments to a file
    run: printf '%s' {1..} > out.txt
"#,
    );
    let (config, cwd) = load(dir.path());
    let args = vec![String::from("first"), String::from("second")];
    let code = runrc::run::run(&config, &cwd, "write", &args).unwrap();
    assert_eq!(code, 0);

    // Each substituted value is JSON-quoted, so the shell strips the quotes
    // and printf sees two arguments.
    let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(written, "firstsecond");
}

#[test]
fn test_run_command_count_and_alias() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
runner:
  command: sh
  args: ["-c"]
commands:
  - alias: meta
    name: Echo alias and count
    run: printf '%s %s' {0} {#} > meta.txt
"#,
    );
    let (config, cwd) = load(dir.path());
    let args = vec![String::from("a"), String::from("b")];
    runrc::run::run(&config, &cwd, "meta", &args).unwrap();

    // Argument vector is [alias, a, b], so {0} is "meta" and {#} is 3.
    let written = std::fs::read_to_string(dir.path().join("meta.txt")).unwrap();
    assert_eq!(written, "meta 3");
}

#[test]
fn test_load_config_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
runner:
  command: sh
  args: ["-c"]
commands:
  - alias: ok
    name: Ok
    run: 'true'
"#,
    );
    // Other tests in this binary only use absolute paths, so changing the
    // process cwd here is safe.
    std::env::set_current_dir(dir.path()).unwrap();
    let (config, cwd) = load_config(Some(".runrc")).unwrap();
    assert_eq!(cwd, Path::new("."));
    let code = runrc::run::run(&config, &cwd, "ok", &[]).unwrap();
    assert_eq!(code, 0);
}

#[test]
fn test_init_then_load() {
    let dir = tempfile::tempdir().unwrap();
    runrc::init::run(dir.path(), false).unwrap();
    let (config, _) = load(dir.path());
    assert!(config.commands.iter().any(|c| c.alias == "hello"));
}

#[test]
fn test_load_config_auto_detect_from_parent() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r"
commands:
  - alias: noop
    name: Noop
    run: 'true'
",
    );
    let nested = dir.path().join("deep").join("er");
    std::fs::create_dir_all(&nested).unwrap();
    let found = runrc::config_file::Config::find_config_in(&nested).unwrap();
    assert_eq!(found, dir.path().join(".runrc"));
}
