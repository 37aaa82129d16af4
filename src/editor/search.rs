//! Recursive substring search over keys and string values.
//!
//! Traversal is depth-first pre-order in document order, the same child
//! order the tree pane shows. For every object entry the key is checked
//! first, then the value (if it is a string), then the value is recursed
//! into regardless of matches; array elements check string values and
//! recurse. Matching is case-sensitive substring containment.

use crate::document::node::JsonValue;
use crate::document::path::display_path;

/// Whether a match was found in a key or a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Key,
    Value,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    /// Full path to the matched entry (last segment is the key/index)
    pub path: Vec<String>,
    pub kind: MatchKind,
    /// The matched key or string value
    pub text: String,
}

impl SearchMatch {
    /// Result-list label, e.g. `Val: banana (Path: root > list > 0)`.
    pub fn label(&self) -> String {
        let tag = match self.kind {
            MatchKind::Key => "Key",
            MatchKind::Value => "Val",
        };
        format!("{}: {} (Path: {})", tag, self.text, display_path(&self.path))
    }
}

/// Searches `node` (addressed by `start_path`) for the query.
///
/// The query must be non-empty; an empty query yields no matches. The
/// returned paths are absolute (they start with `start_path`), so results
/// can be jumped to regardless of search scope.
pub fn search(node: &JsonValue, start_path: &[String], query: &str) -> Vec<SearchMatch> {
    let mut results = Vec::new();
    if query.is_empty() {
        return results;
    }
    search_recursive(node, start_path.to_vec(), query, &mut results);
    results
}

fn search_recursive(
    node: &JsonValue,
    path: Vec<String>,
    query: &str,
    results: &mut Vec<SearchMatch>,
) {
    match node {
        JsonValue::Object(map) => {
            for (key, value) in map {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                if key.contains(query) {
                    results.push(SearchMatch {
                        path: child_path.clone(),
                        kind: MatchKind::Key,
                        text: key.clone(),
                    });
                }
                if let Some(s) = value.as_str() {
                    if s.contains(query) {
                        results.push(SearchMatch {
                            path: child_path.clone(),
                            kind: MatchKind::Value,
                            text: s.to_string(),
                        });
                    }
                }
                search_recursive(value, child_path, query, results);
            }
        }
        JsonValue::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(index.to_string());
                if let Some(s) = value.as_str() {
                    if s.contains(query) {
                        results.push(SearchMatch {
                            path: child_path.clone(),
                            kind: MatchKind::Value,
                            text: s.to_string(),
                        });
                    }
                }
                search_recursive(value, child_path, query, results);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_document;

    fn seg(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_value_match_in_array() {
        let doc =
            parse_document(r#"{"x": {"name": "apple"}, "list": ["banana", "x"]}"#).unwrap();
        let results = search(&doc, &[], "an");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, seg(&["list", "0"]));
        assert_eq!(results[0].kind, MatchKind::Value);
        assert_eq!(results[0].text, "banana");
    }

    #[test]
    fn test_key_and_value_matches() {
        let doc =
            parse_document(r#"{"x": {"name": "apple"}, "list": ["banana", "x"]}"#).unwrap();
        let results = search(&doc, &[], "x");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].path, seg(&["x"]));
        assert_eq!(results[0].kind, MatchKind::Key);
        assert_eq!(results[1].path, seg(&["list", "1"]));
        assert_eq!(results[1].kind, MatchKind::Value);
    }

    #[test]
    fn test_pre_order_document_order() {
        let doc = parse_document(
            r#"{"aa": {"ab": "a"}, "ba": ["a"], "ca": "a"}"#,
        )
        .unwrap();
        let results = search(&doc, &[], "a");
        let paths: Vec<Vec<String>> = results.iter().map(|m| m.path.clone()).collect();

        assert_eq!(
            paths,
            vec![
                seg(&["aa"]),          // key "aa"
                seg(&["aa", "ab"]),    // key "ab"
                seg(&["aa", "ab"]),    // value "a"
                seg(&["ba"]),          // key "ba"
                seg(&["ba", "0"]),     // value "a"
                seg(&["ca"]),          // key "ca"
                seg(&["ca"]),          // value "a"
            ]
        );
    }

    #[test]
    fn test_case_sensitive() {
        let doc = parse_document(r#"{"Name": "Apple"}"#).unwrap();
        assert!(search(&doc, &[], "apple").is_empty());
        assert_eq!(search(&doc, &[], "Apple").len(), 1);
    }

    #[test]
    fn test_scoped_search_keeps_absolute_paths() {
        let doc = parse_document(r#"{"outer": {"inner": ["hit"]}}"#).unwrap();
        let scope = seg(&["outer"]);
        let node = crate::document::path::lookup(&doc, &scope).unwrap();
        let results = search(node, &scope, "hit");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, seg(&["outer", "inner", "0"]));
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let doc = parse_document(r#"{"a": "a"}"#).unwrap();
        assert!(search(&doc, &[], "").is_empty());
    }

    #[test]
    fn test_match_label() {
        let m = SearchMatch {
            path: seg(&["list", "0"]),
            kind: MatchKind::Value,
            text: "banana".to_string(),
        };
        assert_eq!(m.label(), "Val: banana (Path: root > list > 0)");
    }
}
