//! Path-addressed node resolution.
//!
//! A path is an ordered sequence of string segments from the document
//! root: object segments are keys, array segments are base-10 indices in
//! decimal form. Paths are the only identity that survives structural
//! edits, so the editor re-resolves from the root after every mutation
//! instead of holding references across operations.
//!
//! Three resolution flavors exist:
//!
//! - [`try_resolve`] reports failures as typed [`PathError`] values.
//! - [`resolve`] is the compatibility boundary used by navigation code: on
//!   any failure it degrades to the document root, so callers always get a
//!   usable node even when a path has gone stale.
//! - [`lookup`] / [`lookup_mut`] never vivify and never degrade; the
//!   entry model, search, and the mutation layer use these (a failed
//!   lookup there means an empty listing or a no-op).
//!
//! Resolution auto-vivifies a missing object key as `Null` when the key is
//! the final segment. A missing intermediate key is a failure and leaves
//! the document untouched: validation runs before any mutation.

use crate::document::node::JsonValue;
use std::fmt;

/// Errors that can occur while walking a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An array segment did not parse as an unsigned decimal index.
    IndexNotNumeric { segment: String },
    /// An array index was out of range.
    IndexOutOfRange { index: usize, len: usize },
    /// A segment tried to descend into a scalar (or a missing key with
    /// further segments behind it).
    NotAContainer { segment: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::IndexNotNumeric { segment } => {
                write!(f, "Array segment '{}' is not a valid index", segment)
            }
            PathError::IndexOutOfRange { index, len } => {
                write!(f, "Array index {} out of range (length {})", index, len)
            }
            PathError::NotAContainer { segment } => {
                write!(f, "Cannot descend into '{}': not a container", segment)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Validates a path against the current document without mutating it.
///
/// Mirrors exactly what [`try_resolve`] will do, including treating a
/// missing object key as valid only in final position (where resolution
/// would vivify it).
fn verify(root: &JsonValue, path: &[String]) -> Result<(), PathError> {
    let mut node = root;
    for (pos, segment) in path.iter().enumerate() {
        let is_last = pos + 1 == path.len();
        match node {
            JsonValue::Object(map) => match map.get(segment) {
                Some(child) => node = child,
                None if is_last => return Ok(()),
                None => {
                    return Err(PathError::NotAContainer {
                        segment: segment.clone(),
                    })
                }
            },
            JsonValue::Array(items) => {
                let index: usize =
                    segment
                        .parse()
                        .map_err(|_| PathError::IndexNotNumeric {
                            segment: segment.clone(),
                        })?;
                node = items.get(index).ok_or(PathError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?;
            }
            _ => {
                return Err(PathError::NotAContainer {
                    segment: segment.clone(),
                })
            }
        }
    }
    Ok(())
}

/// Walks a pre-verified path, vivifying a missing final object key as Null.
///
/// Steps that cannot be taken stop the walk and yield the node reached so
/// far; [`verify`] guarantees that never happens for the paths we pass in.
fn descend<'a>(mut node: &'a mut JsonValue, path: &[String]) -> &'a mut JsonValue {
    for segment in path {
        let step_ok = match &*node {
            JsonValue::Object(_) => true,
            JsonValue::Array(items) => segment
                .parse::<usize>()
                .map(|i| i < items.len())
                .unwrap_or(false),
            _ => false,
        };
        if !step_ok {
            return node;
        }
        node = match node {
            JsonValue::Object(map) => map
                .entry(segment.clone())
                .or_insert(JsonValue::Null),
            JsonValue::Array(items) => {
                let index: usize = segment.parse().unwrap_or(0);
                &mut items[index]
            }
            other => return other,
        };
    }
    node
}

/// Resolves a path to a mutable node reference, with typed failures.
///
/// An empty path resolves to the root. A missing final object key is
/// inserted as `Null` (auto-insert on access, relied on by the add flow).
/// On failure the document is guaranteed unmutated.
pub fn try_resolve<'a>(
    root: &'a mut JsonValue,
    path: &[String],
) -> Result<&'a mut JsonValue, PathError> {
    verify(root, path)?;
    Ok(descend(root, path))
}

/// Resolves a path to a mutable node reference, degrading to the root on
/// any failure.
///
/// Callers must treat an empty path and a failed path identically; a
/// stale path never produces an error here, only the root. Code that
/// needs to distinguish failure uses [`try_resolve`] or [`lookup`].
pub fn resolve<'a>(root: &'a mut JsonValue, path: &[String]) -> &'a mut JsonValue {
    if verify(root, path).is_err() {
        return root;
    }
    descend(root, path)
}

/// Mutable, non-vivifying lookup.
///
/// Returns None for any path that does not address an existing node. The
/// mutation layer resolves parents through this, so a command with a
/// stale path can never insert anything as a side effect.
pub fn lookup_mut<'a>(
    root: &'a mut JsonValue,
    path: &[String],
) -> Option<&'a mut JsonValue> {
    let mut node = root;
    for segment in path {
        node = match node {
            JsonValue::Object(map) => map.get_mut(segment)?,
            JsonValue::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Immutable, non-vivifying lookup.
///
/// Returns None for any path that does not address an existing node.
pub fn lookup<'a>(root: &'a JsonValue, path: &[String]) -> Option<&'a JsonValue> {
    let mut node = root;
    for segment in path {
        node = match node {
            JsonValue::Object(map) => map.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Formats a path for display, e.g. `root > list > 0`.
pub fn display_path(path: &[String]) -> String {
    let mut out = String::from("root");
    for segment in path {
        out.push_str(" > ");
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_document;

    fn seg(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_path_resolves_to_root() {
        let mut doc = parse_document(r#"{"a": 1}"#).unwrap();
        let expected = doc.clone();
        let node = resolve(&mut doc, &[]);
        assert_eq!(*node, expected);
    }

    #[test]
    fn test_resolve_nested_array_element() {
        let mut doc = parse_document(r#"{"a": [1, 2]}"#).unwrap();
        let node = resolve(&mut doc, &seg(&["a", "0"]));
        assert_eq!(*node, parse_document("1").unwrap());
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_root() {
        let mut doc = parse_document(r#"{"a": [1, 2]}"#).unwrap();
        let expected = doc.clone();
        let node = resolve(&mut doc, &seg(&["a", "9"]));
        assert_eq!(*node, expected);
    }

    #[test]
    fn test_non_numeric_index_is_failure() {
        let mut doc = parse_document(r#"[1, 2]"#).unwrap();
        let err = try_resolve(&mut doc, &seg(&["one"])).unwrap_err();
        assert!(matches!(err, PathError::IndexNotNumeric { .. }));
    }

    #[test]
    fn test_missing_final_key_vivifies_null() {
        let mut doc = parse_document(r#"{"a": 1}"#).unwrap();
        let node = try_resolve(&mut doc, &seg(&["b"])).unwrap();
        assert_eq!(*node, JsonValue::Null);
        assert!(doc.as_object().unwrap().contains_key("b"));
    }

    #[test]
    fn test_missing_intermediate_key_fails_without_vivifying() {
        let mut doc = parse_document(r#"{"a": 1}"#).unwrap();
        let err = try_resolve(&mut doc, &seg(&["b", "c"])).unwrap_err();
        assert!(matches!(err, PathError::NotAContainer { .. }));
        // The failed walk must not leave a stray "b" behind
        assert!(!doc.as_object().unwrap().contains_key("b"));
    }

    #[test]
    fn test_descending_into_scalar_fails() {
        let mut doc = parse_document(r#"{"a": 1}"#).unwrap();
        let err = try_resolve(&mut doc, &seg(&["a", "x"])).unwrap_err();
        assert!(matches!(err, PathError::NotAContainer { .. }));
    }

    #[test]
    fn test_lookup_mut_does_not_vivify() {
        let mut doc = parse_document(r#"{"a": {"b": 2}}"#).unwrap();
        assert!(lookup_mut(&mut doc, &seg(&["a", "b"])).is_some());
        assert!(lookup_mut(&mut doc, &seg(&["missing"])).is_none());
        assert!(!doc.as_object().unwrap().contains_key("missing"));
    }

    #[test]
    fn test_lookup_does_not_vivify() {
        let doc = parse_document(r#"{"a": {"b": 2}}"#).unwrap();
        assert!(lookup(&doc, &seg(&["a", "b"])).is_some());
        assert!(lookup(&doc, &seg(&["a", "missing"])).is_none());
        assert!(lookup(&doc, &seg(&["missing"])).is_none());
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(&[]), "root");
        assert_eq!(display_path(&seg(&["list", "0"])), "root > list > 0");
    }
}
