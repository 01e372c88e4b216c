//! # Treelog
//!
//! A hierarchical structured logging library. Callers create a root logger,
//! derive child loggers that inherit and extend contextual fields, and emit
//! leveled log entries serialized as JSON lines to a pluggable sink.
//!
//! ## Features
//!
//! - **Field Inheritance**: children contribute fields on top of their
//!   ancestors' merged set; call-site fields override both
//! - **Per-Node Serializers**: redact or reshape values just before encoding
//! - **Pluggable Sinks**: stdout, file, any `Write`, or an in-memory buffer
//! - **Thread Safe**: loggers are immutable after construction and sinks
//!   serialize their own writes

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        transform, Fields, Level, LogEntry, Logger, LoggerBuilder, LoggerError, Result,
        Serializer, Sink, Transform,
    };
    pub use crate::sinks::{FileSink, MemorySink, NullSink, StdoutSink, WriterSink};
}

pub use crate::core::{
    is_enabled, severity_of, transform, Fields, Level, LogEntry, Logger, LoggerBuilder,
    LoggerError, Result, Serializer, Sink, Transform,
};
pub use crate::sinks::{FileSink, MemorySink, NullSink, StdoutSink, WriterSink};
