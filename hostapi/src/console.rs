//! Console abstraction over the process standard streams.
//!
//! The bridge never touches `stdin`/`stdout` directly. It goes through a
//! `HostConsole`, so the same `HostApi` implementation drives both the real
//! process streams and an in-memory console in tests.
//!
//! Implementations:
//! - `StdConsole` (this crate) for process standard input and output
//! - `MemConsole` (this crate) for scripted input, captured output

use crate::error::HostError;

/// Line-oriented input and text output used by the `std` bridge.
pub trait HostConsole {
    /// Read one line of input without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, HostError>;

    /// Write text to the output stream.
    fn write_str(&mut self, text: &str) -> Result<(), HostError>;

    /// Write text followed by a single `\n`.
    fn write_line(&mut self, text: &str) -> Result<(), HostError> {
        self.write_str(text)?;
        self.write_str("\n")
    }
}

/// Strip one trailing `\n` or `\r\n` from a line read from a stream.
pub fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
