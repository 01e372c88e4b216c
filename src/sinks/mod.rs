//! Sink implementations

pub mod file;
pub mod memory;
pub mod null;
pub mod stdout;
pub mod writer;

pub use file::FileSink;
pub use memory::MemorySink;
pub use null::NullSink;
pub use stdout::StdoutSink;
pub use writer::WriterSink;

// Re-export the trait for convenience
pub use crate::core::Sink;
