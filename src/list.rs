//! Listing of configured commands

use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, Style};

use crate::config_file::Config;

const NAME_STYLE: Style = Style::new().bold();
const HINT_STYLE: Style = Style::new()
    .fg_color(Some(anstyle::Color::Ansi(AnsiColor::BrightBlack)))
    .italic();

/// Render one line per command: bold name, padded, then the invocation hint.
fn render_lines(config: &Config, color: bool) -> Vec<String> {
    // Pad on character count, not byte length, so non-ASCII names keep the
    // hint column aligned.
    let width = config
        .commands
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    config
        .commands
        .iter()
        .map(|entry| {
            let padding = " ".repeat(width + 2 - entry.name.chars().count());
            let hint = format!("runrc {}", entry.alias);
            if color {
                format!("{NAME_STYLE}{}{Reset}{padding}{HINT_STYLE}{hint}{Reset}", entry.name)
            } else {
                format!("{}{padding}{hint}", entry.name)
            }
        })
        .collect()
}

/// Print all configured commands to stdout.
pub fn list(config: &Config) {
    let color = std::io::stdout().is_terminal();
    for line in render_lines(config, color) {
        println!("{line}");
    }
}
