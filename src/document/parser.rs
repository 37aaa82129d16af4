//! JSON parsing and serialization bridge.
//!
//! This module converts between `JsonValue` and `serde_json::Value`
//! (compiled with `preserve_order`, so object key order round-trips), and
//! implements the two parse entry points the editor needs:
//!
//! - `parse_document`: strict parse of a whole document; failure is fatal
//!   at startup.
//! - `parse_literal`: lenient parse of user-entered text in the value
//!   editor. Invalid JSON is not an error; the text becomes a string value.
//!   There is deliberately no "invalid value" state for the editor pane.

use crate::document::node::{JsonNumber, JsonValue};
use anyhow::{Context, Result};

/// Parses a complete JSON document.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON.
pub fn parse_document(content: &str) -> Result<JsonValue> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse JSON")?;
    Ok(from_serde(&value))
}

/// Parses user-entered text into a JSON value.
///
/// Newlines are stripped first (a single-line input widget should never
/// produce them, but pasted text can). If the cleaned text parses as JSON
/// it becomes that value; otherwise it becomes a plain string. `"hello"`
/// therefore edits to the string `hello`, while bare `hello` does too, and
/// `123` / `true` / `null` edit to their literal values.
pub fn parse_literal(input: &str) -> JsonValue {
    let cleaned = clean_literal(input);
    match serde_json::from_str::<serde_json::Value>(&cleaned) {
        Ok(value) => from_serde(&value),
        Err(_) => JsonValue::String(cleaned),
    }
}

/// Strips newline characters from user input.
pub fn clean_literal(input: &str) -> String {
    input.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Serializes a value to its canonical single-line JSON literal.
///
/// This is what the value editor shows for scalars: strings keep their
/// quotes, null renders as `null`.
pub fn to_literal(value: &JsonValue) -> String {
    serde_json::to_string(&to_serde(value)).unwrap_or_else(|_| "null".to_string())
}

/// Serializes a value as pretty-printed JSON with the given indent width.
pub fn to_pretty_string(value: &JsonValue, indent_size: usize) -> String {
    let serde_value = to_serde(value);
    let indent = vec![b' '; indent_size];
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    if serde::Serialize::serialize(&serde_value, &mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Converts a `serde_json::Value` into a `JsonValue`.
///
/// Integers that fit in i64 stay integral; u64 values beyond i64::MAX and
/// all other numbers become floats.
pub fn from_serde(value: &serde_json::Value) -> JsonValue {
    match value {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(JsonNumber::Integer(i))
            } else {
                JsonValue::Number(JsonNumber::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        serde_json::Value::String(s) => JsonValue::String(s.clone()),
        serde_json::Value::Array(items) => {
            JsonValue::Array(items.iter().map(from_serde).collect())
        }
        serde_json::Value::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect(),
        ),
    }
}

/// Converts a `JsonValue` back into a `serde_json::Value`.
pub fn to_serde(value: &JsonValue) -> serde_json::Value {
    match value {
        JsonValue::Null => serde_json::Value::Null,
        JsonValue::Boolean(b) => serde_json::Value::Bool(*b),
        JsonValue::Number(JsonNumber::Integer(i)) => serde_json::Value::from(*i),
        JsonValue::Number(JsonNumber::Float(f)) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        JsonValue::String(s) => serde_json::Value::String(s.clone()),
        JsonValue::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_serde).collect())
        }
        JsonValue::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_serde(v))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_object_order() {
        let doc = parse_document(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_document_rejects_invalid() {
        assert!(parse_document("{not json").is_err());
    }

    #[test]
    fn test_parse_literal_valid_json() {
        assert_eq!(parse_literal("123"), JsonValue::Number(JsonNumber::Integer(123)));
        assert_eq!(parse_literal("true"), JsonValue::Boolean(true));
        assert_eq!(parse_literal("null"), JsonValue::Null);
        assert_eq!(
            parse_literal("\"quoted\""),
            JsonValue::String("quoted".to_string())
        );
    }

    #[test]
    fn test_parse_literal_falls_back_to_string() {
        assert_eq!(
            parse_literal("not valid json"),
            JsonValue::String("not valid json".to_string())
        );
        // Newlines are stripped before the fallback
        assert_eq!(
            parse_literal("line1\nline2"),
            JsonValue::String("line1line2".to_string())
        );
    }

    #[test]
    fn test_to_literal_keeps_quotes_for_strings() {
        assert_eq!(to_literal(&JsonValue::String("abc".to_string())), "\"abc\"");
        assert_eq!(to_literal(&JsonValue::Null), "null");
        assert_eq!(
            to_literal(&JsonValue::Number(JsonNumber::Integer(7))),
            "7"
        );
    }

    #[test]
    fn test_pretty_string_two_space_indent() {
        let doc = parse_document(r#"{"a": [1, 2]}"#).unwrap();
        let pretty = to_pretty_string(&doc, 2);
        assert_eq!(pretty, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let doc = parse_document(r#"{"b": {"y": 1, "x": 2}, "a": null}"#).unwrap();
        let text = to_pretty_string(&doc, 2);
        let again = parse_document(&text).unwrap();
        assert_eq!(doc, again);
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let doc = parse_document("18446744073709551615").unwrap();
        assert!(matches!(doc, JsonValue::Number(JsonNumber::Float(_))));
    }
}
