//! Linear undo/redo history of reversible edits.
//!
//! Each committed mutation is recorded as an [`EditAction`] pairing the
//! forward command with its inverse, plus the view coordinates (parent
//! path and focus key) needed to put the cursor back where the edit
//! happened. Two LIFO stacks hold the actions; pushing a new action after
//! an undo discards the redo stack, so history stays strictly linear with
//! no branching timelines.
//!
//! Inverses are computed at commit time by the editor state (see
//! `editor::state`), so replaying an action through [`History::undo`] or
//! [`History::redo`] reproduces the exact prior document, including
//! object key order.

use crate::document::node::JsonValue;
use crate::editor::command::{apply, EditCommand};

/// One committed, reversible edit.
///
/// Immutable once pushed. `path` is the parent path at the time of
/// recording and `focus_key` the key/index to reselect after replay.
#[derive(Debug, Clone)]
pub struct EditAction {
    pub undo: EditCommand,
    pub redo: EditCommand,
    pub path: Vec<String>,
    pub focus_key: String,
}

/// Undo/redo stacks. Capacity is unbounded; edits are never coalesced.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new action, invalidating any redoable future.
    pub fn push(&mut self, action: EditAction) {
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undoes the most recent action against the document.
    ///
    /// Returns the action so the caller can restore the view at its
    /// `path`/`focus_key`, or None if there is nothing to undo.
    pub fn undo(&mut self, document: &mut JsonValue) -> Option<&EditAction> {
        let action = self.undo_stack.pop()?;
        apply(document, &action.undo);
        self.redo_stack.push(action);
        self.redo_stack.last()
    }

    /// Reapplies the most recently undone action.
    pub fn redo(&mut self, document: &mut JsonValue) -> Option<&EditAction> {
        let action = self.redo_stack.pop()?;
        apply(document, &action.redo);
        self.undo_stack.push(action);
        self.undo_stack.last()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
