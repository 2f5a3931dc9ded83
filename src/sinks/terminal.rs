//! Terminal sink

use crate::core::log_level::Level;
use std::io::Write;

/// Writes assembled lines to the process streams: ERROR and CRITICAL go to
/// stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }

    pub fn write_line(&self, level: Level, line: &str) {
        match level {
            Level::Error | Level::Critical => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    pub fn flush(&self) -> std::io::Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}
