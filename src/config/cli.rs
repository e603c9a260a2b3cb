use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::io::Write;

/// Reports each value as one decimal line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleSink {
    fn report(&mut self, value: i32) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", value)?;
        Ok(())
    }
}
