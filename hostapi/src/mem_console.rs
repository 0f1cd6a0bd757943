//! In-memory console for testing.
//!
//! `MemConsole` implements `HostConsole` with a queue of scripted input
//! lines and a `String` that captures everything written. Useful for unit
//! tests and integration tests where real process streams are not wanted.

use std::collections::VecDeque;

use crate::console::HostConsole;
use crate::error::HostError;

/// Scripted input lines and captured output.
#[derive(Debug, Clone, Default)]
pub struct MemConsole {
    input: VecDeque<String>,
    output: String,
}

impl MemConsole {
    /// Create a console with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will answer reads with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Queue another input line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the captured output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Number of input lines not yet read.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl HostConsole for MemConsole {
    fn read_line(&mut self) -> Result<Option<String>, HostError> {
        Ok(self.input.pop_front())
    }

    fn write_str(&mut self, text: &str) -> Result<(), HostError> {
        self.output.push_str(text);
        Ok(())
    }
}
