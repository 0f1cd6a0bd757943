//! Process standard streams console.

use std::io::{self, BufRead, Write};

use crate::console::{trim_newline, HostConsole};
use crate::error::HostError;

/// `HostConsole` backed by the process's standard input and output.
///
/// Input lines are decoded lossily. Output is flushed after every write so
/// that text printed before a `readln` is visible while the read blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    /// Create a console on the process standard streams.
    pub fn new() -> Self {
        Self
    }
}

impl HostConsole for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>, HostError> {
        let mut raw = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut raw)? == 0 {
            tracing::debug!("standard input reached end of file");
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        trim_newline(&mut line);
        Ok(Some(line))
    }

    fn write_str(&mut self, text: &str) -> Result<(), HostError> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
