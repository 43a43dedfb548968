//! Console alert sink
//!
//! Errors go to stderr, everything else to stdout. Lines are
//! printed immediately so a failing file is visible as soon as its check
//! settles.

use colored::Colorize;

use crate::core::models::LogLevel;
use crate::core::ports::Alerts;

/// Prints alerts to the terminal, filtered by log level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlerts {
    level: LogLevel,
}

impl ConsoleAlerts {
    /// Create a sink printing at `level`
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    fn shows(self, needed: LogLevel) -> bool {
        self.level >= needed
    }
}

impl Alerts for ConsoleAlerts {
    fn error(&self, message: &str) {
        if self.shows(LogLevel::Minimal) {
            eprintln!("{} {message}", "[error]".red().bold());
        }
    }

    fn notice(&self, message: &str) {
        if self.shows(LogLevel::Minimal) {
            println!("{message}");
        }
    }

    fn info(&self, message: &str) {
        if self.shows(LogLevel::Verbose) {
            println!("{message}");
        }
    }

    fn success(&self, message: &str) {
        if self.shows(LogLevel::Verbose) {
            println!("{}", message.green());
        }
    }
}
