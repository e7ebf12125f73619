//! Diagnostic log sinks
//!
//! The walker never prints directly. It reports through a [`LogSink`] handed
//! in by the caller, so a run can log to stderr while tests capture lines in
//! memory.

use std::cell::RefCell;
use std::io::Write;

use chrono::{SecondsFormat, Utc};

/// Append-only destination for diagnostic messages.
pub trait LogSink {
    /// Append one already formatted line.
    fn append(&self, line: &str);

    /// Append a message prefixed with the current UTC timestamp.
    fn log(&self, message: &str) {
        self.append(&format!("[{}] {}", timestamp(), message));
    }

    fn warn(&self, message: &str) {
        self.log(&format!("WARN: {}", message));
    }
}

/// RFC 3339 timestamp with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Writes log lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLog {
    quiet: bool,
}

impl StderrLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that drops every line.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl LogSink for StderrLog {
    fn append(&self, line: &str) {
        if self.quiet {
            return;
        }
        // Nothing sensible to do if stderr itself is gone.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Keeps log lines in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: RefCell<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Lines written through [`LogSink::warn`].
    pub fn warnings(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.contains("] WARN: "))
            .cloned()
            .collect()
    }
}

impl LogSink for MemoryLog {
    fn append(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
