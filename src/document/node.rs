//! JSON value representation with order-preserving objects.
//!
//! This module provides the core data structure for representing JSON
//! documents in jsonquill. Objects are backed by `IndexMap`, so key order
//! is insertion order and survives load, display, every mutation, and save.
//! Key order is semantically significant throughout the editor: tree
//! listings, search traversal, and undo replay all depend on it.
//!
//! # Example
//!
//! ```
//! use jsonquill::document::node::{JsonValue, JsonNumber, ValueKind};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), JsonValue::String("jsonquill".to_string()));
//! map.insert("version".to_string(), JsonValue::Number(JsonNumber::Integer(1)));
//! let object = JsonValue::Object(map);
//!
//! assert!(object.is_object());
//! assert_eq!(object.kind(), ValueKind::Object);
//! ```

use indexmap::IndexMap;

/// A JSON number (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Integer(_))
    }
}

/// A JSON value.
///
/// Objects contain `JsonValue` instances keyed by string in insertion
/// order; arrays are ordered vectors. These two are the only containers.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object with insertion-ordered key-value pairs
    Object(IndexMap<String, JsonValue>),
    /// A JSON array of ordered values
    Array(Vec<JsonValue>),
    /// A JSON string
    String(String),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null
    Null,
}

/// Tag identifying the type of a `JsonValue`.
///
/// Used by tree entries and the theme layer, where only the kind of a
/// child matters, not its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonValue {
    /// Returns the kind tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Object(_) => ValueKind::Object,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::Boolean(_) => ValueKind::Boolean,
            JsonValue::Null => ValueKind::Null,
        }
    }

    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// Containers can be descended into in the tree view; scalars open
    /// the value editor instead.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Returns the object map if this value is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the mutable object map if this value is an object.
    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the array elements if this value is an array.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mutable array elements if this value is an array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string contents if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}
