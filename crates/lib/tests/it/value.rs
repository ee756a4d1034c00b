//! Value and serialization tests at the Node boundary.

use nested_traversal::{Kind, Node, Object, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_from_json_str_parses_documents() {
    let node = Node::from_json_str(r#"{"a": {"b": [1, 2]}, "flag": true}"#).unwrap();
    assert_eq!(node.get("a.b.1").unwrap(), 2);
    assert_eq!(node.get("flag").unwrap(), true);
}

#[test]
fn test_from_json_str_reports_invalid_input() {
    let err = Node::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_type_mismatch());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_serialization_keeps_key_order() {
    let mut node = Node::new();
    node.set("zeta", 1).unwrap();
    node.set("alpha", 2).unwrap();
    node.set("mid.0", "x").unwrap();
    assert_eq!(node.to_json_string(), r#"{"zeta":1,"alpha":2,"mid":["x"]}"#);
}

#[test]
fn test_serde_round_trip_through_node() {
    let node = setup_config_node();
    let text = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&text).unwrap();
    assert_eq!(back, node);
    assert!(!back.to_json().ptr_eq(&node.to_json()));
}

#[test]
fn test_pretty_output() {
    let node = Node::from(json!({"a": [1]}));
    let pretty = node.to_json_string_pretty().unwrap();
    assert_eq!(pretty, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[test]
fn test_non_json_values_in_output() {
    let mut node = Node::new();
    node.set("hook", Value::opaque(|| ())).unwrap();
    node.set("list.1", "second").unwrap();
    node.set("gone", Value::Undefined).unwrap();

    assert_eq!(node.to_serde_json(), json!({"list": [null, "second"]}));
    assert!(node.has("hook"));
}

#[test]
fn test_display_matches_json_text() {
    let node = Node::from(json!({"a": [1, "two", null]}));
    assert_eq!(node.to_string(), r#"{"a":[1,"two",null]}"#);
    assert_eq!(node.traverse("a.1").to_string(), "two");
    assert_eq!(node.traverse("missing").to_string(), "undefined");
}

#[test]
fn test_kinds_reported_by_nodes() {
    let node = setup_collection_node();
    assert_eq!(node.traverse("users").kind(), Kind::Array);
    assert_eq!(node.traverse("settings").kind(), Kind::Object);
    assert_eq!(node.traverse("nullValue").kind(), Kind::Null);
    assert_eq!(node.traverse("undefinedValue").kind(), Kind::Undefined);
    assert_eq!(node.traverse("settings.theme").kind(), Kind::String);
}

#[test]
fn test_shared_handles_across_nodes() {
    let shared = Object::new();
    shared.insert("count", 1);

    let mut left = Node::new();
    let mut right = Node::new();
    left.set("shared", shared.clone()).unwrap();
    right.set("shared", shared.clone()).unwrap();

    left.set("shared.count", 2).unwrap();
    assert_eq!(right.get("shared.count").unwrap(), 2);
    assert_eq!(shared.get("count"), Some(Value::from(2)));
}

#[test]
fn test_float_and_integer_numbers() {
    let node = Node::from(json!({"ratio": 0.5, "count": 3}));
    assert_eq!(node.get("ratio").unwrap(), 0.5);
    assert_eq!(node.get("count").unwrap(), 3);
    assert_eq!(node.traverse("count").to_json().as_f64(), Some(3.0));

    let mut node = Node::new();
    node.set("nan", f64::NAN).unwrap();
    assert_eq!(node.get("nan"), Some(nested_traversal::Item::Value(Value::Null)));
}

#[test]
fn test_wide_objects_keep_order_and_keyed_access() {
    let wide: serde_json::Map<String, serde_json::Value> = (0..50_000)
        .map(|i| (format!("key_{i}"), json!(i)))
        .collect();
    let mut node = Node::from(serde_json::Value::Object(wide));
    assert_eq!(node.len(), 50_000);
    assert_eq!(node.get("key_49999").unwrap(), 49_999);
    assert_eq!(node.keys()[1].to_string(), "key_1");

    let incoming: Object = (0..50_000).map(|i| (format!("key_{i}"), i * 2)).collect();
    node.merge(incoming);
    assert_eq!(node.len(), 50_000);
    assert_eq!(node.get("key_49999").unwrap(), 99_998);
    assert_eq!(node.keys()[0].to_string(), "key_0");
}
