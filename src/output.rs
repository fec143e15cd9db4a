//! Terminal output formatting for the pwa-assets CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs,
//! gated by a log level. All status output goes to stderr; stdout is
//! reserved for machine-readable output (head links, manifest JSON).

use std::io::{self, IsTerminal, Write};

use serde::{Deserialize, Serialize};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// How much status output the CLI emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Status, skip and success lines.
    #[default]
    Info,
    /// Warnings and errors only.
    Warn,
    /// Errors only.
    Silent,
}

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
    level: LogLevel,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_level(LogLevel::Info)
    }

    pub fn with_level(level: LogLevel) -> Self {
        Self {
            color: io::stderr().is_terminal(),
            level,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Print a status line with a green bold verb.
    /// e.g. "  Generating logo.svg"
    pub fn status(&self, verb: &str, message: &str) {
        if self.level == LogLevel::Info {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        if self.level == LogLevel::Info {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        if self.level == LogLevel::Info {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Print a skip line with a dim verb, e.g. for already-existing assets.
    pub fn skip(&self, verb: &str, message: &str) {
        if self.level == LogLevel::Info {
            self.print_line(DIM, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        if self.level != LogLevel::Silent {
            self.print_line(YELLOW, verb, message);
        }
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as cyan (for paths, info).
    pub fn cyan(&self, text: &str) -> String {
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "asset", "assets")` → "1 asset".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "asset", "assets"), "1 asset");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "asset", "assets"), "0 assets");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(5, "file", "files"), "5 files");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        // An absolute path outside cwd should stay absolute
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_log_level_parses_from_config_strings() {
        let level: LogLevel = serde_yaml::from_str("silent").unwrap();
        assert_eq!(level, LogLevel::Silent);
        let level: LogLevel = serde_yaml::from_str("info").unwrap();
        assert_eq!(level, LogLevel::Info);
    }
}
