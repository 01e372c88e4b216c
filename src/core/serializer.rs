//! Per-logger value transforms applied immediately before encoding

use super::entry::LogEntry;
use super::fields::Fields;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A transform run over an entry's message and field map before the sink
/// encodes it. Installed per logger node; never chained across ancestors.
pub type Serializer = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A transform applied to the value of a single field, keyed by field name.
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Wrap a closure as a [`Transform`].
pub fn transform<F>(f: F) -> Transform
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a composite serializer from a per-key transform table.
///
/// For object input, every key present in both the object and the table is
/// replaced with its transformed value; other keys pass through unchanged.
/// Non-object input (notably the message string) passes through unchanged.
pub fn compose(transforms: HashMap<String, Transform>) -> Serializer {
    Arc::new(move |value| match value {
        Value::Object(mut map) => {
            for (key, transform) in &transforms {
                if let Some(slot) = map.get_mut(key.as_str()) {
                    let current = slot.take();
                    *slot = transform(current);
                }
            }
            Value::Object(map)
        }
        other => other,
    })
}

/// Run a serializer over an entry's message and field map.
///
/// # Panics
///
/// Panics if the serializer returns a non-string for the message or a
/// non-object for the field map. Both indicate a broken transform installed
/// on the logger, a programming error rather than a runtime condition.
pub(crate) fn apply(serializer: &Serializer, entry: LogEntry) -> LogEntry {
    let message = match serializer(Value::String(entry.message)) {
        Value::String(message) => message,
        other => panic!("serializer returned a non-string message: {:?}", other),
    };

    let fields = match serializer(Value::from(entry.fields)) {
        Value::Object(map) => Fields::from_object(map),
        other => panic!("serializer returned a non-object field map: {:?}", other),
    };

    LogEntry {
        message,
        fields,
        ..entry
    }
}
