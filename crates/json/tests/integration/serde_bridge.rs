//! Integration test: text I/O through serde_json
#![cfg(feature = "serde")]

use nebula_json::{Limits, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_edit_emit() {
    let text = r#"{"id":7,"user":{"name":"Ada","roles":["admin"]},"active":true}"#;
    let mut doc: Value = serde_json::from_str(text).unwrap();

    doc.slot("user").slot("roles").push("editor");
    doc.set("active", false);

    assert_eq!(
        serde_json::to_string(&doc).unwrap(),
        r#"{"id":7,"user":{"name":"Ada","roles":["admin","editor"]},"active":false}"#
    );
}

#[test]
fn test_validate_untrusted_input() {
    let text = r#"{"a":[[[[1]]]]}"#;
    let doc: Value = serde_json::from_str(text).unwrap();

    let limits = Limits {
        max_nesting_depth: 3,
        ..Limits::strict()
    };
    let err = doc.validate(&limits).unwrap_err();
    assert_eq!(err.code(), "JSON_LIMIT_EXCEEDED");
    assert!(doc.validate(&Limits::default()).is_ok());
}

#[test]
fn test_limits_from_config() {
    let limits: Limits = serde_json::from_str(r#"{"max_array_length": 5}"#).unwrap();
    assert_eq!(limits.max_array_length, 5);
    assert_eq!(limits.max_nesting_depth, Limits::default().max_nesting_depth);
}

#[test]
fn test_serde_json_value_interop() {
    let doc = Value::from_json(json!({"b": 1, "a": [true, null]}));
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b", "a"]);

    let back = serde_json::Value::from(&doc);
    assert_eq!(back, json!({"b": 1, "a": [true, null]}));
}

#[test]
fn test_non_finite_numbers() {
    let doc = Value::object_from([("x", f64::INFINITY)]);
    assert!(serde_json::to_string(&doc).is_err());
    assert_eq!(doc.to_json(), json!({"x": null}));
}
