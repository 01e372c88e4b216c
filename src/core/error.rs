//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sink refused the entry with a backend-specific reason
    #[error("sink '{sink}' rejected entry: {message}")]
    SinkRejected { sink: String, message: String },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create a sink rejection error
    pub fn sink_rejected(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkRejected {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}
