//! Integration test: building and reading documents
//!
//! A workflow step assembles a JSON document field by field, reads it back
//! through both access styles and edits it in place.

use nebula_json::{Kind, Value, ValueError};
use pretty_assertions::assert_eq;

#[test]
fn test_person_record() {
    let mut root = Value::default();
    assert_eq!(root.kind(), Kind::Object);

    root.set("name", Value::from("Ada"));
    root.set("age", Value::from(37.0));
    root.slot("tags")
        .assign(Value::array(vec![Value::from("x"), Value::from("y")]));

    assert!(root.contains("name"));
    assert_eq!(root.get("age").unwrap().as_double(), Ok(37.0));
    assert_eq!(root["tags"][1].as_string(), Ok("y".to_string()));
    assert_eq!(root["missing"].kind(), Kind::Null);

    let keys: Vec<_> = root.iter().map(|m| m.key().unwrap()).collect();
    assert_eq!(keys, vec!["name", "age", "tags"]);
}

#[test]
fn test_chained_reads_never_panic() {
    let root = Value::object_from([("list", vec![1, 2, 3])]);

    assert!(root["list"][99].is_sentinel());
    assert!(root["list"]["key"].is_sentinel());
    assert!(root["nope"][0]["deeper"].is_sentinel());
    assert!(Value::from(true)[0].is_sentinel());
}

#[test]
fn test_writes_through_detached_handles_are_ignored() {
    let mut root = Value::object_from([("n", 1)]);

    root.slot("n").slot("inner").assign("lost");
    root.slot_at(3).assign("lost");
    root.slot("n").slot_at(0).set("k", 1);

    assert_eq!(root["n"], 1);
    assert_eq!(root.len(), 1);

    // the sentinel still reads as null for everyone else
    assert!(Value::sentinel().is_null());
    assert!(root["other"].is_null());
}

#[test]
fn test_nested_config_edit() {
    let mut config = Value::new();
    {
        let mut server = config.slot("server");
        server.set("host", "localhost");
        server.set("port", 8080);
    }
    config.slot("server").slot("tls").set("enabled", false);
    config.slot("workers").assign(Value::array(Vec::new()));
    for id in 0..3 {
        config.slot("workers").push(Value::object_from([("id", id)]));
    }

    assert_eq!(config["server"]["port"].as_uint(), Ok(8080));
    assert_eq!(config["server"]["tls"]["enabled"], false);
    assert_eq!(config["workers"].len(), 3);
    assert_eq!(config["workers"][2]["id"], 2);

    // overwrite keeps position
    config.slot("server").set("host", "0.0.0.0");
    let server_keys: Vec<_> = config["server"].keys().collect();
    assert_eq!(server_keys, vec!["host", "port", "tls"]);
}

#[test]
fn test_fallible_access_reports_cause() {
    let doc = Value::object_from([("items", vec!["a"])]);

    assert_eq!(
        doc.get("items").and_then(|items| items.get(4)).unwrap_err(),
        ValueError::out_of_range(4, 1)
    );
    assert_eq!(
        doc.get("items").and_then(|items| items.get("a")).unwrap_err(),
        ValueError::wrong_kind(Kind::Object, Kind::Array)
    );
    assert_eq!(doc.get("nope").unwrap_err().code(), "JSON_NOT_FOUND");

    let name = doc
        .get("name")
        .and_then(Value::as_string)
        .unwrap_or_else(|_| "anonymous".to_string());
    assert_eq!(name, "anonymous");
}

#[test]
fn test_erase_and_reinsert_moves_to_end() {
    let mut doc = Value::object_from([("a", 1), ("b", 2), ("c", 3)]);

    assert!(doc.erase("a"));
    doc.set("a", 10);

    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    assert_eq!(doc["a"], 10);
}

#[test]
fn test_extract_typed_record() {
    let doc = Value::object_from([
        ("name", Value::from("Ada")),
        ("scores", Value::from(vec![90, 85])),
        ("nickname", Value::null()),
    ]);

    let name: String = doc["name"].to().unwrap();
    let scores: Vec<u8> = doc["scores"].to().unwrap();
    let nickname: Option<String> = doc["nickname"].to().unwrap();

    assert_eq!(name, "Ada");
    assert_eq!(scores, vec![90, 85]);
    assert_eq!(nickname, None);
}
