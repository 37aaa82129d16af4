//! Integration tests for the document core: parsing, path resolution,
//! and serialization.

use jsonquill::document::node::{JsonNumber, JsonValue};
use jsonquill::document::parser::{parse_document, parse_literal, to_literal, to_pretty_string};
use jsonquill::document::path::{display_path, lookup, resolve, try_resolve};

fn seg(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_preserves_key_order() {
    let doc = parse_document(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
    let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn test_nested_resolution() {
    let mut doc = parse_document(r#"{"a": {"b": [10, {"c": true}]}}"#).unwrap();

    let node = try_resolve(&mut doc, &seg(&["a", "b", "1"])).unwrap();
    assert!(node.is_object());

    let leaf = lookup(&doc, &seg(&["a", "b", "1", "c"])).unwrap();
    assert_eq!(*leaf, JsonValue::Boolean(true));
}

#[test]
fn test_resolution_failure_falls_back_to_root() {
    let mut doc = parse_document(r#"{"a": {"b": 1}}"#).unwrap();
    let before = doc.clone();

    let node = resolve(&mut doc, &seg(&["a", "missing", "deep"]));
    assert!(node.is_object());
    // The whole root comes back and nothing was vivified along the way
    assert_eq!(node.as_object().unwrap().len(), 1);
    assert_eq!(doc, before);
}

#[test]
fn test_final_object_key_vivifies_as_null() {
    let mut doc = parse_document(r#"{"a": {}}"#).unwrap();
    let node = resolve(&mut doc, &seg(&["a", "new"]));
    assert_eq!(*node, JsonValue::Null);
    assert_eq!(doc, parse_document(r#"{"a": {"new": null}}"#).unwrap());
}

#[test]
fn test_array_index_out_of_range_fails() {
    let mut doc = parse_document(r#"{"list": [1, 2]}"#).unwrap();
    assert!(try_resolve(&mut doc, &seg(&["list", "2"])).is_err());
    assert!(try_resolve(&mut doc, &seg(&["list", "x"])).is_err());
    assert!(try_resolve(&mut doc, &seg(&["list", "1"])).is_ok());
}

#[test]
fn test_literal_parsing_and_fallback() {
    assert_eq!(parse_literal("42"), JsonValue::Number(JsonNumber::Integer(42)));
    assert_eq!(parse_literal("true"), JsonValue::Boolean(true));
    assert_eq!(parse_literal("null"), JsonValue::Null);
    assert_eq!(
        parse_literal("\"quoted\""),
        JsonValue::String("quoted".to_string())
    );
    // Unparseable input becomes a string
    assert_eq!(
        parse_literal("hello world"),
        JsonValue::String("hello world".to_string())
    );
}

#[test]
fn test_literal_round_trip_for_scalars() {
    for text in ["42", "-3.5", "true", "false", "null", "\"s\""] {
        let value = parse_literal(text);
        assert_eq!(to_literal(&value), text);
    }
}

#[test]
fn test_pretty_string_matches_two_space_style() {
    let doc = parse_document(r#"{"a": [1, {"b": null}]}"#).unwrap();
    let expected = "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}";
    assert_eq!(to_pretty_string(&doc, 2), expected);
}

#[test]
fn test_display_path_formatting() {
    assert_eq!(display_path(&[]), "root");
    assert_eq!(display_path(&seg(&["list", "0"])), "root > list > 0");
}
