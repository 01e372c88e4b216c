//! JSON-lines file sink

use crate::core::{LogEntry, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink appending entries to a file, one JSON object per line.
///
/// Compatible with log aggregation tools that ingest JSONL (ELK, Loki, etc).
pub struct FileSink {
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating the file if missing.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl Sink for FileSink {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = entry.to_json()?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.flush();
    }
}
