//! Log entry structure

use super::fields::Fields;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single immutable log record.
///
/// Entries serialize as one JSON object:
/// `{"timestamp": "...", "message": "...", "level": "...", "fields": {...}}`.
/// Field keys are sorted, so encoding the same entry twice produces
/// byte-identical output. Equality is deep value comparison of all four
/// members, independent of how the field map was assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 instant of emission.
    pub timestamp: String,
    /// Human-readable message. A serializer may rewrite it, but it stays a string.
    pub message: String,
    /// Level name at emission time.
    pub level: String,
    /// Merged structured fields. May be empty, never absent.
    pub fields: Fields,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(level: impl Into<String>, message: impl Into<String>, fields: Fields) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            message: message.into(),
            level: level.into(),
            fields,
        }
    }

    /// Serialize to a single-line JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse an entry from its wire JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
