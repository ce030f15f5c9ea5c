// Thu Feb 12 2026 - Alex

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = Box::new(ConsoleLogger { level });
    log::set_boxed_logger(logger).ok();
    log::set_max_level(level);
}

/// Console logging plus an append-only log file, as used for analysis and
/// generation runs.
pub fn init_logger_with_file(verbose: bool, file_path: &Path) -> std::io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = OpenOptions::new().create(true).append(true).open(file_path)?;
    let logger = Box::new(TeeLogger {
        console: ConsoleLogger { level },
        file: Mutex::new(file),
    });
    log::set_boxed_logger(logger).ok();
    log::set_max_level(level);
    Ok(())
}

pub fn init_from_env() {
    env_logger::init();
}

struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    fn format_level(level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {} {}",
                Self::format_level(record.level()),
                format!("[{}]", record.target()).dimmed(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

struct TeeLogger {
    console: ConsoleLogger,
    file: Mutex<std::fs::File>,
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.console.log(record);
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "{:5} [{}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
