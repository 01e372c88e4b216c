//! Structured key-value fields attached to loggers and log entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A map of structured fields.
///
/// Values are arbitrary JSON values. Keys are kept sorted, so encoding a
/// given field set always produces the same byte sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(serde_json::Map<String, Value>);

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self(serde_json::Map::new())
    }

    /// Add a field, consuming and returning the map.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Add a field in place.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a field value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Overlay `other` onto `self`, replacing same-named keys.
    pub fn overlay(&mut self, other: &Fields) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub(crate) fn from_object(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<serde_json::Map<String, Value>> for Fields {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Object(fields.0)
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
