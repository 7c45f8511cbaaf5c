//! Stderr logger for the CLI
//!
//! Levelled diagnostics go to stderr so they never mix with command output
//! on stdout. Colors are only emitted when stderr is a terminal. An optional
//! log file receives every record with a relative timestamp.

use std::io::{IsTerminal, Write};
use std::sync::Mutex;
use std::time::Instant;

use anstyle::{AnsiColor, Reset, Style};
use log::{Level, Log, Metadata, Record};

struct RunrcLogger {
    filter: log::LevelFilter,
    color: bool,
    file: Option<Mutex<std::fs::File>>,
    start: Instant,
}

fn level_style(level: Level) -> Style {
    let color = match level {
        Level::Error => AnsiColor::Red,
        Level::Warn => AnsiColor::Yellow,
        Level::Info => AnsiColor::Blue,
        Level::Debug | Level::Trace => AnsiColor::BrightBlack,
    };
    Style::new().fg_color(Some(anstyle::Color::Ansi(color))).bold()
}

impl Log for RunrcLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if self.color {
            let style = level_style(record.level());
            eprintln!("{style}{:>5}{Reset} {}", record.level(), record.args());
        } else {
            eprintln!("{:>5} {}", record.level(), record.args());
        }

        if let Some(ref file) = self.file
            && let Ok(mut file) = file.lock()
        {
            let elapsed = Instant::now().duration_since(self.start).as_secs_f64();
            let _ = writeln!(
                file,
                "[{elapsed:.3}s] [{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger. Must be called once before any logging.
/// The filter comes from `RUST_LOG`, defaulting to `Info`.
pub fn init(log_file: Option<std::fs::File>) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    let logger = RunrcLogger {
        filter,
        color: std::io::stderr().is_terminal(),
        file: log_file.map(Mutex::new),
        start: Instant::now(),
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(filter);
    }
}
