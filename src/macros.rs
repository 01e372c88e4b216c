//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`, plus a literal
//! syntax for building field maps.
//!
//! # Examples
//!
//! ```
//! use treelog::prelude::*;
//! use treelog::{fields, info};
//! use std::sync::Arc;
//!
//! let logger = Logger::root(Arc::new(MemorySink::new()));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Structured fields
//! logger.info_with_fields("login", fields! { "user" => "alice", "attempts" => 3 });
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use treelog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::root(Arc::new(MemorySink::new()));
/// use treelog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::Fields::new())
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use treelog::fields;
///
/// let fields = fields! { "user" => "alice", "attempts" => 3 };
/// assert_eq!(fields.len(), 2);
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.add_field($key, $value);)+
        fields
    }};
}
