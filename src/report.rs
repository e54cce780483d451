//! Leveled console reporting
//!
//! Core logic reports outcomes through the `Reporter` trait instead of
//! printing directly, so tests can observe output without a terminal.

use colored::Colorize;

/// Severity-leveled output sink.
pub trait Reporter {
    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a success message.
    fn success(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);

    /// Print a line without any level styling.
    fn plain(&self, msg: &str);
}

/// Writes leveled messages to stdout, color-coded by severity.
///
/// `colored` disables itself when stdout is not a terminal, so piped output
/// stays plain text.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        println!("{}", msg.blue());
    }

    fn success(&self, msg: &str) {
        println!("{}", msg.green());
    }

    fn warning(&self, msg: &str) {
        println!("{}", msg.yellow());
    }

    fn error(&self, msg: &str) {
        println!("{}", msg.red());
    }

    fn plain(&self, msg: &str) {
        println!("{msg}");
    }
}

/// A no-op reporter for silent operations.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn plain(&self, _: &str) {}
}
