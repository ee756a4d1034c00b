//! Navigation tests: get, traverse, has and reference sharing.

use nested_traversal::{Item, Key, Node, Value};
use serde_json::json;

use crate::helpers::*;

// ===== GET =====

#[test]
fn test_get_missing_property_is_absent() {
    let node = setup_config_node();
    assert!(node.get("nonexistentProperty").is_none());
    assert!(node.get("nestedConfig.nope.deeper").is_none());
}

#[test]
fn test_get_nested_leaf_with_dot_notation() {
    let node = setup_config_node();
    assert_eq!(node.get("nestedConfig.level1.level2.value").unwrap(), "test");
    assert_eq!(node.get("flushConfig.batchSize").unwrap(), 20);
    assert_eq!(node.get("debugMode").unwrap(), false);
}

#[test]
fn test_get_wraps_containers() {
    let node = setup_config_node();
    let nested = node.get("nestedConfig").unwrap();
    assert!(nested.is_node());
    let nested = nested.into_node().unwrap();
    assert_eq!(nested.get("level1.level2.value").unwrap(), "test");
}

#[test]
fn test_get_chained_calls() {
    let node = setup_config_node();
    let level1 = node.get("nestedConfig").and_then(Item::into_node).unwrap();
    let level2 = level1.get("level1").and_then(Item::into_node).unwrap();
    assert_eq!(level2.get("level2.value").unwrap(), "test");
}

#[test]
fn test_get_array_elements() {
    let node = setup_config_node();
    assert_eq!(node.get("arrayConfig.0.id").unwrap(), 1);
    assert_eq!(node.get("arrayConfig.1.name").unwrap(), "Item 2");
    assert!(node.get("arrayConfig.2").is_none());
    assert!(node.get("arrayConfig.name").is_none());
}

#[test]
fn test_numeric_segment_on_object_is_a_key() {
    let node = Node::from(json!({"map": {"0": "zero", "10": "ten"}}));
    assert_eq!(node.get("map.0").unwrap(), "zero");
    assert_eq!(node.get("map.10").unwrap(), "ten");
}

#[test]
fn test_get_through_primitive_is_absent() {
    let node = Node::from(json!({"a": 1, "s": "text"}));
    assert!(node.get("a.b").is_none());
    assert!(node.get("s.0").is_none());
}

#[test]
fn test_get_stops_on_null() {
    let node = Node::from(json!({"a": null}));
    assert_eq!(node.get("a"), Some(Item::Value(Value::Null)));
    assert_eq!(node.get("a.b.c"), Some(Item::Value(Value::Null)));
}

#[test]
fn test_get_undefined_slot_is_absent() {
    let node = Node::from(json!({"arr": [1]}));
    node.traverse("arr").value().as_array().unwrap().set(3, 4);
    assert!(node.get("arr.1").is_none());
    assert_eq!(node.get("arr.3").unwrap(), 4);
}

#[test]
fn test_empty_path_is_empty_key() {
    let node = Node::from(json!({"": "blank", "a": 1}));
    assert_eq!(node.get("").unwrap(), "blank");
    assert!(Node::new().get("").is_none());
}

// ===== TRAVERSE =====

#[test]
fn test_traverse_always_wraps() {
    let node = setup_config_node();

    let leaf = node.traverse("nestedConfig.level1.level2.value");
    assert_eq!(leaf.to_json(), "test");

    let missing = node.traverse("does.not.exist");
    assert!(missing.is_absent());
    assert!(missing.traverse("still.nothing").is_absent());
    assert!(missing.keys().is_empty());

    let flag = node.traverse("debugMode");
    assert_eq!(flag.to_json(), false);
}

#[test]
fn test_traverse_chain_matches_joined_path() {
    let node = setup_config_node();
    let joined = node.traverse("nestedConfig.level1.level2");
    let chained = node
        .traverse("nestedConfig")
        .traverse("level1")
        .traverse("level2");
    assert!(joined.to_json().ptr_eq(&chained.to_json()));

    let joined = node.traverse("arrayConfig.1.name");
    let chained = node.traverse("arrayConfig").traverse("1").traverse("name");
    assert_eq!(joined, chained);
}

#[test]
fn test_traverse_keys_of_array() {
    let node = Node::from(json!({"users": [{"id": 1}, {"id": 2}]}));
    assert_eq!(
        node.traverse("users").keys(),
        vec![Key::Index(0), Key::Index(1)]
    );
}

// ===== HAS =====

#[test]
fn test_has_distinguishes_null_from_absent() {
    let node = Node::from(json!({"present": 0, "nothing": null, "nested": {"x": false}}));
    assert!(node.has("present"));
    assert!(node.has("nothing"));
    assert!(node.has("nested.x"));
    assert!(!node.has("missing"));
    assert!(!node.has("nested.y"));
    assert!(!node.has("nothing.below"));
    assert!(!node.has("present.below"));
}

#[test]
fn test_has_treats_undefined_as_absent() {
    let mut node = Node::new();
    node.set("gone", Value::Undefined).unwrap();
    node.set("arr.2", 1).unwrap();
    assert!(!node.has("gone"));
    assert!(!node.has("arr.0"));
    assert!(node.has("arr.2"));
}

// ===== REFERENCE SEMANTICS =====

#[test]
fn test_round_trip_is_reference_equal() {
    let original = v(json!({"a": [1, 2], "b": {"c": 3}}));
    let node = Node::wrap(original.clone());
    assert!(node.to_json().ptr_eq(&original));

    let list = Value::array([1, 2, 3]);
    assert!(Node::wrap(list.clone()).to_json().ptr_eq(&list));
}

#[test]
fn test_child_mutation_visible_in_parent() {
    let node = setup_config_node();
    let mut nested = node.get("nestedConfig").and_then(Item::into_node).unwrap();
    nested.set("level1.newValue", "chainedSet").unwrap();
    assert_eq!(node.get("nestedConfig.level1.newValue").unwrap(), "chainedSet");

    let mut first = node.traverse("arrayConfig.0");
    first.set("name", "Renamed").unwrap();
    assert_eq!(node.get("arrayConfig.0.name").unwrap(), "Renamed");
}

#[test]
fn test_sibling_nodes_share_storage() {
    let node = setup_config_node();
    let mut one = node.traverse("flushConfig");
    let two = node.traverse("flushConfig");
    one.set("batchSize", 99).unwrap();
    assert_eq!(two.get("batchSize").unwrap(), 99);
}

#[test]
fn test_navigation_does_not_mutate() {
    let node = setup_config_node();
    let before = node.to_json_string();
    let _ = node.get("a.b.c");
    let _ = node.traverse("x.0.y");
    let _ = node.has("arrayConfig.5");
    assert_eq!(node.to_json_string(), before);
}
