//! ui::status
//!
//! Status reporting from the workflow back to the front-end.
//!
//! # Design
//!
//! The scaffolder and bootstrapper announce each step through a
//! [`StatusSink`]. The terminal front-end prints these lines, tests record
//! them. The sink never influences control flow.

use super::output::{self, Verbosity};

/// Receiver of progress messages.
pub trait StatusSink {
    /// Replace the current status line.
    fn set(&mut self, text: &str);
}

/// Prints status lines to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleStatus {
    verbosity: Verbosity,
}

impl ConsoleStatus {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl StatusSink for ConsoleStatus {
    fn set(&mut self, text: &str) {
        tracing::debug!(status = text);
        output::print(text, self.verbosity);
    }
}

/// Records status lines in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatus {
    pub lines: Vec<String>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl StatusSink for RecordingStatus {
    fn set(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
