//! Property-based tests for treelog using proptest

use proptest::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use treelog::prelude::*;
use treelog::severity_of;

fn fields_from(map: &HashMap<String, i64>) -> Fields {
    let mut fields = Fields::new();
    for (key, value) in map {
        fields.add_field(key.clone(), *value);
    }
    fields
}

fn small_fields() -> impl Strategy<Value = HashMap<String, i64>> {
    // Single-letter keys from a tiny alphabet force overlap between maps
    prop::collection::hash_map("[a-d]", any::<i64>(), 0..4)
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]) {
        let as_str = level.as_str();
        let parsed: Level = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that Level ordering is consistent with severity ranks
    #[test]
    fn test_level_ordering(
        level1 in prop_oneof![
            Just(Level::Debug),
            Just(Level::Info),
            Just(Level::Warn),
            Just(Level::Error),
            Just(Level::Fatal),
        ],
        level2 in prop_oneof![
            Just(Level::Debug),
            Just(Level::Info),
            Just(Level::Warn),
            Just(Level::Error),
            Just(Level::Fatal),
        ]
    ) {
        prop_assert_eq!(level1 <= level2, level1.severity() <= level2.severity());
        prop_assert_eq!(level1 < level2, level1.severity() < level2.severity());
    }

    /// Test that Level Display matches the wire name
    #[test]
    fn test_level_display(level in prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]) {
        prop_assert_eq!(format!("{}", level), level.as_str());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// Test that emission follows the severity table exactly
    #[test]
    fn test_emission_matches_severity_table(
        configured in prop_oneof![
            Just(Level::Debug),
            Just(Level::Info),
            Just(Level::Warn),
            Just(Level::Error),
            Just(Level::Fatal),
        ],
        candidate in prop_oneof![
            Just(Level::Debug),
            Just(Level::Info),
            Just(Level::Warn),
            Just(Level::Error),
            Just(Level::Fatal),
        ]
    ) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder().level(configured).sink(sink.clone()).build();

        logger.log(candidate, "probe", Fields::new());

        let expected = candidate.severity() >= configured.severity();
        prop_assert_eq!(sink.len() == 1, expected);
    }

    /// Test that unknown candidate names never emit at built-in configured levels
    #[test]
    fn test_unknown_candidate_never_emits(
        name in "[a-z]{1,12}",
        configured in prop_oneof![
            Just(Level::Debug),
            Just(Level::Info),
            Just(Level::Warn),
            Just(Level::Error),
            Just(Level::Fatal),
        ]
    ) {
        prop_assume!(severity_of(&name) == 0);

        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder().level(configured).sink(sink.clone()).build();

        logger.log(name.as_str(), "probe", Fields::new());
        prop_assert!(sink.is_empty());
    }
}

// ============================================================================
// Field Merge Tests
// ============================================================================

proptest! {
    /// Test that merged fields are the last-writer-wins union of
    /// root fields, child fields, and call-site fields, in that order
    #[test]
    fn test_merge_last_writer_wins(
        root_fields in small_fields(),
        child_fields in small_fields(),
        call_fields in small_fields(),
    ) {
        let sink = Arc::new(MemorySink::new());
        let mut builder = Logger::builder().sink(sink.clone());
        for (key, value) in &root_fields {
            builder = builder.field(key.clone(), *value);
        }
        let root = builder.build();
        let child = root.child(fields_from(&child_fields));

        child.log(Level::Info, "probe", fields_from(&call_fields));

        let mut expected: HashMap<String, i64> = HashMap::new();
        expected.extend(root_fields);
        expected.extend(child_fields);
        expected.extend(call_fields);

        let entries = sink.take();
        prop_assert_eq!(entries.len(), 1);
        let fields = &entries[0].fields;
        prop_assert_eq!(fields.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(fields.get(key), Some(&Value::from(*value)));
        }
    }

    /// Test that deriving a child never mutates the parent's fields
    #[test]
    fn test_derivation_leaves_parent_untouched(
        parent_fields in small_fields(),
        child_fields in small_fields(),
    ) {
        let root = Logger::builder().sink(Arc::new(MemorySink::new())).build();
        let parent = root.child(fields_from(&parent_fields));
        let before = parent.event_fields().clone();

        let _child = parent.child(fields_from(&child_fields));

        prop_assert_eq!(parent.event_fields(), &before);
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// Test that encoding ignores field insertion order
    #[test]
    fn test_encoding_order_independent(map in small_fields()) {
        let mut pairs: Vec<(String, i64)> = map.into_iter().collect();

        let mut forward = Fields::new();
        for (key, value) in &pairs {
            forward.add_field(key.clone(), *value);
        }
        pairs.reverse();
        let mut reverse = Fields::new();
        for (key, value) in &pairs {
            reverse.add_field(key.clone(), *value);
        }

        let entry = LogEntry::new("info", "probe", forward);
        let mut other = entry.clone();
        other.fields = reverse;

        prop_assert_eq!(&entry, &other);
        prop_assert_eq!(entry.to_json().unwrap(), other.to_json().unwrap());
    }

    /// Test that the wire JSON of an entry decodes back to an equal entry
    #[test]
    fn test_wire_round_trip(message in ".*", map in small_fields()) {
        let entry = LogEntry::new("warn", message, fields_from(&map));

        let decoded = LogEntry::from_json(&entry.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    /// Test that entry construction and encoding never panic on arbitrary messages
    #[test]
    fn test_entry_no_panic(message in ".*", level in ".*") {
        let entry = LogEntry::new(level, message, Fields::new());
        let _ = entry.to_json().unwrap();
    }
}
