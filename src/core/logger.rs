//! Logger tree implementation

use super::{
    entry::LogEntry,
    error::Result,
    fields::Fields,
    level::{self, Level},
    serializer::{self, Serializer, Transform},
    sink::Sink,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// One node of the logger hierarchy.
///
/// A node carries its configured level, the fields it contributes to every
/// entry, an optional serializer, and the sink it writes to. All of these
/// are fixed at construction; the only state that changes afterwards is the
/// list of children, which grows as loggers are derived and is never pruned.
///
/// Loggers are handed out as `Arc<Logger>`. A child holds a non-owning back
/// reference to its parent for field resolution, while the parent owns the
/// child; dropping every external handle to a subtree frees it.
///
/// # Example
///
/// ```
/// use treelog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let root = Logger::root(sink.clone());
/// let request = root.child(Fields::new().with_field("request_id", "abc-123"));
///
/// request.info("request accepted");
/// assert_eq!(sink.len(), 1);
/// ```
pub struct Logger {
    level: String,
    parent: Weak<Logger>,
    /// Self-handle so derivation methods can take `&self`.
    this: Weak<Logger>,
    children: Mutex<Vec<Arc<Logger>>>,
    event_fields: Fields,
    serializer: Option<Serializer>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a root logger writing to `sink` at the default `info` level,
    /// with no parent, no children, no fields, and no serializer.
    pub fn root(sink: Arc<dyn Sink>) -> Arc<Self> {
        Self::builder().sink(sink).build()
    }

    /// Create a builder for a root logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configured minimum level name.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The fields this node contributes to every entry it emits.
    pub fn event_fields(&self) -> &Fields {
        &self.event_fields
    }

    /// Snapshot of the loggers derived directly from this node.
    pub fn children(&self) -> Vec<Arc<Logger>> {
        self.children.lock().clone()
    }

    /// Number of loggers derived directly from this node.
    pub fn child_count(&self) -> usize {
        self.children.lock().len()
    }

    /// Whether a call at `candidate` would emit through this logger.
    pub fn is_enabled(&self, candidate: &str) -> bool {
        level::is_enabled(&self.level, candidate)
    }

    /// Derive a child contributing `fields` on top of this node's merged set.
    ///
    /// The child inherits this node's level and sink. It does *not* inherit
    /// the serializer; use [`Logger::with_fields`] for that.
    pub fn child(&self, fields: Fields) -> Arc<Logger> {
        self.derive(self.level.clone(), fields, None)
    }

    /// Like [`Logger::child`], but the child also shares this node's
    /// serializer.
    pub fn with_fields(&self, fields: Fields) -> Arc<Logger> {
        self.derive(self.level.clone(), fields, self.serializer.clone())
    }

    /// Derive a child carrying a composite serializer built from a per-key
    /// transform table.
    ///
    /// Each transform rewrites the value under its key in the field map;
    /// keys without a transform pass through unchanged, as does the message.
    /// The child's serializer replaces any serializer on this node rather
    /// than wrapping it.
    ///
    /// # Example
    ///
    /// ```
    /// use treelog::prelude::*;
    /// use serde_json::Value;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let root = Logger::root(sink.clone());
    ///
    /// let mut transforms: HashMap<String, Transform> = HashMap::new();
    /// transforms.insert(
    ///     "password".to_string(),
    ///     transform(|_| Value::String("<redacted>".to_string())),
    /// );
    /// let redacting = root.with_serializers(transforms);
    ///
    /// redacting.log(Level::Info, "login", Fields::new().with_field("password", "hunter2"));
    /// let entries = sink.entries();
    /// assert_eq!(entries[0].fields.get("password"), Some(&Value::String("<redacted>".into())));
    /// ```
    pub fn with_serializers(&self, transforms: HashMap<String, Transform>) -> Arc<Logger> {
        self.derive(
            self.level.clone(),
            Fields::new(),
            Some(serializer::compose(transforms)),
        )
    }

    /// Derive a child carrying an arbitrary serializer.
    ///
    /// The serializer runs twice per emitting call: once over the message,
    /// which must come back a string, and once over the field map, which
    /// must come back an object. Violating either contract panics at the log
    /// call; that signals a broken transform, not a runtime condition.
    pub fn with_serializer(&self, serializer: Serializer) -> Arc<Logger> {
        self.derive(self.level.clone(), Fields::new(), Some(serializer))
    }

    /// Derive a child filtering at `level` instead of this node's level.
    ///
    /// Levels are fixed per node at construction, so changing the threshold
    /// for part of a tree means deriving. The serializer is shared, like
    /// [`Logger::with_fields`].
    pub fn with_level(&self, level: Level) -> Arc<Logger> {
        self.derive(
            level.as_str().to_string(),
            Fields::new(),
            self.serializer.clone(),
        )
    }

    fn derive(&self, level: String, fields: Fields, serializer: Option<Serializer>) -> Arc<Logger> {
        let child = Arc::new_cyclic(|this| Logger {
            level,
            parent: self.this.clone(),
            this: this.clone(),
            children: Mutex::new(Vec::new()),
            event_fields: self.merged_fields(&fields),
            serializer,
            sink: Arc::clone(&self.sink),
        });
        self.children.lock().push(Arc::clone(&child));
        child
    }

    /// Effective field set for a call on this node: the union along the
    /// ancestor chain, root first, with each descendant overriding
    /// same-named ancestor keys and `call_fields` overriding everything.
    pub fn merged_fields(&self, call_fields: &Fields) -> Fields {
        let mut merged = match self.parent.upgrade() {
            Some(parent) => parent.merged_fields(&Fields::new()),
            None => Fields::new(),
        };
        merged.overlay(&self.event_fields);
        merged.overlay(call_fields);
        merged
    }

    /// Emit an entry at `level` if it passes this node's filter.
    ///
    /// Disabled calls return immediately with no side effect. A sink failure
    /// is reported once on stderr and swallowed; logging never returns an
    /// error to the caller.
    pub fn log(&self, level: impl AsRef<str>, message: impl Into<String>, fields: Fields) {
        let level = level.as_ref();
        if !level::is_enabled(&self.level, level) {
            return;
        }

        let mut entry = LogEntry::new(level, message, self.merged_fields(&fields));
        if let Some(serializer) = &self.serializer {
            entry = serializer::apply(serializer, entry);
        }

        if let Err(e) = self.sink.write(&entry) {
            eprintln!(
                "[LOGGER ERROR] sink '{}' failed to write entry: {}",
                self.sink.name(),
                e
            );
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message, Fields::new());
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message, Fields::new());
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message, Fields::new());
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message, Fields::new());
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message, Fields::new());
    }

    /// Helper for structured info logging
    pub fn info_with_fields(&self, message: impl Into<String>, fields: Fields) {
        self.log(Level::Info, message, fields);
    }

    /// Helper for structured error logging
    pub fn error_with_fields(&self, message: impl Into<String>, fields: Fields) {
        self.log(Level::Error, message, fields);
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

/// Builder for constructing a root [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use treelog::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .field("service", "api-gateway")
///     .sink(Arc::new(MemorySink::new()))
///     .build();
/// ```
pub struct LoggerBuilder {
    level: String,
    fields: Fields,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Info.as_str().to_string(),
            fields: Fields::new(),
            sink: None,
        }
    }

    /// Set the minimum level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level.as_str().to_string();
        self
    }

    /// Set the minimum level by raw name.
    ///
    /// Unknown names rank below every built-in level, so a root configured
    /// with an unrecognized name accepts every candidate.
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Add a field contributed to every entry emitted through the tree
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Set the sink. Defaults to [`crate::sinks::StdoutSink`] if not called.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the root logger
    pub fn build(self) -> Arc<Logger> {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(crate::sinks::StdoutSink::new()));

        Arc::new_cyclic(|this| Logger {
            level: self.level,
            parent: Weak::new(),
            this: this.clone(),
            children: Mutex::new(Vec::new()),
            event_fields: self.fields,
            serializer: None,
            sink,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use serde_json::json;

    #[test]
    fn test_root_defaults() {
        let root = Logger::root(Arc::new(MemorySink::new()));

        assert_eq!(root.level(), "info");
        assert!(root.event_fields().is_empty());
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn test_builder_level_and_fields() {
        let root = Logger::builder()
            .level(Level::Debug)
            .field("service", "billing")
            .sink(Arc::new(MemorySink::new()))
            .build();

        assert_eq!(root.level(), "debug");
        assert_eq!(root.event_fields().get("service"), Some(&json!("billing")));
    }

    #[test]
    fn test_child_is_registered_and_inherits_level() {
        let root = Logger::builder()
            .level(Level::Warn)
            .sink(Arc::new(MemorySink::new()))
            .build();

        let child = root.child(Fields::new().with_field("component", "auth"));

        assert_eq!(root.child_count(), 1);
        assert_eq!(child.level(), "warn");
        assert_eq!(child.event_fields().get("component"), Some(&json!("auth")));
    }

    #[test]
    fn test_child_fields_flatten_ancestors() {
        let root = Logger::builder()
            .field("service", "billing")
            .sink(Arc::new(MemorySink::new()))
            .build();
        let child = root.child(Fields::new().with_field("component", "invoices"));
        let grandchild = child.child(Fields::new().with_field("job", "nightly"));

        let fields = grandchild.event_fields();
        assert_eq!(fields.get("service"), Some(&json!("billing")));
        assert_eq!(fields.get("component"), Some(&json!("invoices")));
        assert_eq!(fields.get("job"), Some(&json!("nightly")));
    }

    #[test]
    fn test_merged_fields_call_site_overrides() {
        let root = Logger::builder()
            .field("k", "root")
            .sink(Arc::new(MemorySink::new()))
            .build();
        let child = root.child(Fields::new().with_field("k", "child"));

        let merged = child.merged_fields(&Fields::new().with_field("k", "call"));
        assert_eq!(merged.get("k"), Some(&json!("call")));

        let merged = child.merged_fields(&Fields::new());
        assert_eq!(merged.get("k"), Some(&json!("child")));
    }

    #[test]
    fn test_with_level_changes_threshold_only_for_derived_node() {
        let sink = Arc::new(MemorySink::new());
        let root = Logger::root(sink.clone());
        let verbose = root.with_level(Level::Debug);

        root.debug("dropped");
        verbose.debug("kept");

        let entries = sink.take();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_is_enabled_matches_free_function() {
        let root = Logger::builder()
            .level(Level::Error)
            .sink(Arc::new(MemorySink::new()))
            .build();

        assert!(root.is_enabled("fatal"));
        assert!(!root.is_enabled("warn"));
        assert!(!root.is_enabled("nonsense"));
    }
}
