//! Sink that drops every entry

use crate::core::{LogEntry, Result, Sink};

/// A sink that simply drops all records.
///
/// Useful for measuring the overhead of the logger itself and for tests
/// that don't care about persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fields;

    #[test]
    fn test_null_sink_accepts_everything() {
        let sink = NullSink::new();
        sink.write(&LogEntry::new("info", "dropped", Fields::new()))
            .unwrap();
        sink.flush().unwrap();
    }
}
