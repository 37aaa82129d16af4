//! Primitive, reversible document mutations.
//!
//! Every edit the user can make is expressed as one tagged [`EditCommand`]
//! and executed through a single [`apply`] function. Commands carry plain
//! data (path, key/index, value), so the history can store an operation
//! together with its inverse without capturing any editor state, and tests
//! can drive the mutation layer directly.
//!
//! All commands address the *parent* container by path; the key or index
//! names the child. A path that fails to resolve makes the command a
//! silent no-op, as does a key/index that no longer matches the container.
//! Structural failures are absorbed, never raised, and the resolution is
//! non-vivifying, so a no-op truly leaves the document untouched.
//!
//! Replaying a command always reproduces the exact prior state, including
//! object key order: `AddKey` and `RenameKey` can carry an explicit
//! position for that purpose, used when they act as recorded inverses.

use crate::document::node::JsonValue;
use crate::document::path::lookup_mut;

/// Direction for [`EditCommand::MoveKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// One position earlier among siblings
    Earlier,
    /// One position later among siblings
    Later,
}

/// A single primitive mutation of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Overwrite an existing child (object key or array index).
    /// No-op if the key is absent or the index is out of range.
    SetValue {
        path: Vec<String>,
        key: String,
        value: JsonValue,
    },
    /// Insert a key into an object. `index: None` appends at the end of
    /// key order (or overwrites in place if the key exists); `Some(i)`
    /// inserts at position i, shifting later keys (used by history
    /// replay to restore exact order).
    AddKey {
        path: Vec<String>,
        key: String,
        value: JsonValue,
        index: Option<usize>,
    },
    /// Remove a key from an object, preserving the relative order of the
    /// remaining keys. No-op if absent.
    RemoveKey { path: Vec<String>, key: String },
    /// Rename a key. The value is reinserted under the new key at the end
    /// of key order, then the old key is dropped. `restore_index: Some(i)`
    /// afterwards moves the key back to position i (history replay only).
    /// Collisions are rejected by the caller before a command is built.
    RenameKey {
        path: Vec<String>,
        from: String,
        to: String,
        restore_index: Option<usize>,
    },
    /// Insert an array element at index ≤ len (index == len appends),
    /// shifting later elements right. No-op otherwise.
    ArrayInsert {
        path: Vec<String>,
        index: usize,
        value: JsonValue,
    },
    /// Remove the array element at index < len, shifting later elements
    /// left. No-op otherwise.
    ArrayRemove { path: Vec<String>, index: usize },
    /// Move a key one position earlier or later among its siblings.
    /// No-op at the boundary; all other siblings keep relative order.
    MoveKey {
        path: Vec<String>,
        key: String,
        direction: MoveDirection,
    },
}

impl EditCommand {
    /// The parent path this command addresses.
    pub fn path(&self) -> &[String] {
        match self {
            EditCommand::SetValue { path, .. }
            | EditCommand::AddKey { path, .. }
            | EditCommand::RemoveKey { path, .. }
            | EditCommand::RenameKey { path, .. }
            | EditCommand::ArrayInsert { path, .. }
            | EditCommand::ArrayRemove { path, .. }
            | EditCommand::MoveKey { path, .. } => path,
        }
    }
}

/// Applies a command to the document.
///
/// Resolution failures and stale keys/indices are silent no-ops. The
/// parent is resolved without vivification, so a failed resolution never
/// mutates anything.
pub fn apply(document: &mut JsonValue, command: &EditCommand) {
    let Some(parent) = lookup_mut(document, command.path()) else {
        return;
    };

    match command {
        EditCommand::SetValue { key, value, .. } => set_value(parent, key, value),
        EditCommand::AddKey {
            key, value, index, ..
        } => add_key(parent, key, value, *index),
        EditCommand::RemoveKey { key, .. } => {
            if let JsonValue::Object(map) = parent {
                map.shift_remove(key);
            }
        }
        EditCommand::RenameKey {
            from,
            to,
            restore_index,
            ..
        } => rename_key(parent, from, to, *restore_index),
        EditCommand::ArrayInsert { index, value, .. } => {
            if let JsonValue::Array(items) = parent {
                if *index <= items.len() {
                    items.insert(*index, value.clone());
                }
            }
        }
        EditCommand::ArrayRemove { index, .. } => {
            if let JsonValue::Array(items) = parent {
                if *index < items.len() {
                    items.remove(*index);
                }
            }
        }
        EditCommand::MoveKey { key, direction, .. } => move_key(parent, key, *direction),
    }
}

fn set_value(parent: &mut JsonValue, key: &str, value: &JsonValue) {
    match parent {
        JsonValue::Object(map) => {
            if let Some(slot) = map.get_mut(key) {
                *slot = value.clone();
            }
        }
        JsonValue::Array(items) => {
            if let Some(slot) = key.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                *slot = value.clone();
            }
        }
        _ => {}
    }
}

fn add_key(parent: &mut JsonValue, key: &str, value: &JsonValue, index: Option<usize>) {
    let JsonValue::Object(map) = parent else {
        return;
    };
    match index {
        // shift_insert places the key at the position, shifting later
        // keys; for an existing key it moves it there as well
        Some(i) => {
            let i = i.min(map.len());
            map.shift_insert(i, key.to_string(), value.clone());
        }
        // IndexMap::insert appends new keys, overwrites existing in place
        None => {
            map.insert(key.to_string(), value.clone());
        }
    }
}

fn rename_key(parent: &mut JsonValue, from: &str, to: &str, restore_index: Option<usize>) {
    let JsonValue::Object(map) = parent else {
        return;
    };
    if from == to {
        return;
    }
    let Some(value) = map.shift_remove(from) else {
        return;
    };
    map.insert(to.to_string(), value);
    if let Some(target) = restore_index {
        let last = map.len() - 1;
        map.move_index(last, target.min(last));
    }
}

fn move_key(parent: &mut JsonValue, key: &str, direction: MoveDirection) {
    let JsonValue::Object(map) = parent else {
        return;
    };
    let Some(current) = map.get_index_of(key) else {
        return;
    };
    match direction {
        MoveDirection::Earlier if current > 0 => map.move_index(current, current - 1),
        MoveDirection::Later if current + 1 < map.len() => {
            map.move_index(current, current + 1)
        }
        _ => {}
    }
}
