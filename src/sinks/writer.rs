//! Generic writer sink

use crate::core::{LogEntry, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Sink writing JSON lines to any [`Write`] implementation.
///
/// Useful for sockets and in-memory byte buffers. Access to the writer is
/// serialized through a mutex.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
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
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fields;

    #[test]
    fn test_writer_sink_roundtrip() {
        let sink = WriterSink::new(Vec::new());
        let entry = LogEntry::new("warn", "low disk", Fields::new().with_field("free_mb", 12));

        sink.write(&entry).unwrap();

        let bytes = sink.into_inner();
        let line = String::from_utf8(bytes).unwrap();
        let decoded = LogEntry::from_json(line.trim_end()).unwrap();
        assert_eq!(decoded, entry);
    }
}
