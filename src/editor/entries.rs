//! Derivation of the visible child listing for a tree node.
//!
//! The tree pane is a flat menu over the children of the current node.
//! This module derives that listing: one [`TreeEntry`] per child, in
//! document order, prefixed with a synthetic `..` row when the current
//! node is not the root. Listings are regenerated from scratch on every
//! navigation or mutation, never patched.

use crate::document::node::{JsonValue, ValueKind};
use crate::document::path::lookup;

/// Sentinel key for the go-to-parent row.
pub const PARENT_KEY: &str = "..";

/// One row of the tree pane.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// Display label: key/index plus a type suffix for containers
    pub label: String,
    /// Raw key or decimal index, or `..` for the parent row
    pub key: String,
    /// Kind of the underlying value; None for the parent row
    pub kind: Option<ValueKind>,
}

impl TreeEntry {
    fn parent() -> Self {
        Self {
            label: PARENT_KEY.to_string(),
            key: PARENT_KEY.to_string(),
            kind: None,
        }
    }

    fn child(key: String, value: &JsonValue) -> Self {
        let label = match value {
            JsonValue::Object(_) => format!("{} (Object)", key),
            JsonValue::Array(_) => format!("{} (Array)", key),
            _ => key.clone(),
        };
        Self {
            label,
            key,
            kind: Some(value.kind()),
        }
    }

    /// True for the synthetic `..` row.
    pub fn is_parent(&self) -> bool {
        self.key == PARENT_KEY
    }
}

/// Lists the children of the node at `path`, in document order.
///
/// A non-root path gets the `..` row first. A scalar target, or a path
/// that no longer resolves, contributes no child rows.
pub fn list_children(document: &JsonValue, path: &[String]) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    if !path.is_empty() {
        entries.push(TreeEntry::parent());
    }
    match lookup(document, path) {
        Some(JsonValue::Object(map)) => {
            for (key, value) in map {
                entries.push(TreeEntry::child(key.clone(), value));
            }
        }
        Some(JsonValue::Array(items)) => {
            for (index, value) in items.iter().enumerate() {
                entries.push(TreeEntry::child(index.to_string(), value));
            }
        }
        _ => {}
    }
    entries
}

/// Finds the listing index of the entry with the given key.
pub fn index_of_key(entries: &[TreeEntry], key: &str) -> Option<usize> {
    entries.iter().position(|e| e.key == key)
}
