//! Integration test: ownership, copies and keys
//!
//! Keys travel with values. Copies are deep and detached.

use nebula_json::{Kind, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_deep_copy_independence() {
    let original = Value::object_from([
        ("list", Value::from(vec![1, 2])),
        ("nested", Value::object_from([("x", 1)])),
    ]);

    let mut copy = original.clone();
    copy.slot("list").slot_at(0).assign(100);
    copy.slot("nested").set("x", "changed");
    copy.set("added", true);

    assert_eq!(original["list"][0], 1);
    assert_eq!(original["nested"]["x"], 1);
    assert!(!original.contains("added"));
    assert_eq!(copy["list"][0], 100);
}

#[test]
fn test_copy_of_member_is_unkeyed() {
    let doc = Value::object_from([("inner", Value::object_from([("x", 1)]))]);

    let copy = doc["inner"].clone();
    assert_eq!(copy.key(), None);
    assert_eq!(copy["x"].key(), Some("x"));
    assert_eq!(copy, doc["inner"]);
}

#[test]
fn test_take_leaves_null_regardless_of_kind() {
    let samples = [
        Value::new(),
        Value::array(vec![Value::from(1)]),
        Value::from("s"),
        Value::from(1.5),
        Value::from(false),
        Value::null(),
    ];

    for mut source in samples {
        let kind = source.kind();
        let moved = source.take();
        assert_eq!(source.kind(), Kind::Null);
        assert_eq!(moved.kind(), kind);
    }
}

#[test]
fn test_moved_member_carries_key_until_reinserted() {
    let mut from = Value::object_from([("payload", vec![1, 2, 3])]);
    let member = from.slot("payload").take();
    assert_eq!(member.key(), Some("payload"));

    let mut to = Value::new();
    to.set("data", member);
    assert_eq!(to["data"].key(), Some("data"));
    assert_eq!(to["data"].len(), 3);

    let mut list = Value::array(Vec::new());
    list.push(to["data"].clone());
    list.push(from.into_iter().next().unwrap());
    assert!(list.iter().all(|item| item.key().is_none()));
}

#[test]
fn test_assign_into_member_keeps_slot_key() {
    let mut doc = Value::object_from([("a", 1), ("b", 2)]);
    let b = doc["b"].clone();

    doc.slot("a").assign(b);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc["a"], 2);
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();

    let doc = Value::object_from([("n", 1)]);
    let handle = std::thread::spawn(move || doc["n"].as_int());
    assert_eq!(handle.join().unwrap(), Ok(1));
}
