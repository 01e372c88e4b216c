//! Sink trait for log output destinations

use super::{entry::LogEntry, error::Result};

/// Destination that durably records serialized entries.
///
/// A single sink may be shared by every logger in a tree across threads, so
/// `write` takes `&self`; implementations serialize access to the underlying
/// writer themselves.
pub trait Sink: Send + Sync {
    /// Encode and durably write one entry. A write either succeeds whole or
    /// fails without emitting a partial record.
    fn write(&self, entry: &LogEntry) -> Result<()>;

    /// Flush any buffering the sink performs. Default is a no-op.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Short name used in diagnostics when a write fails.
    fn name(&self) -> &str;
}
