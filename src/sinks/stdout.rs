//! Standard output sink

use crate::core::{LogEntry, Result, Sink};
use std::io::Write;

/// Sink writing entries as JSON lines to standard output.
///
/// This is the default sink for loggers built without an explicit one. Each
/// write holds the stdout lock for the whole line, so concurrent loggers
/// sharing this sink never interleave records.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = entry.to_json()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
