//! Central editor state.
//!
//! `EditorState` is the one context struct threaded through input handling
//! and rendering. It owns the document, the navigation state, the history,
//! the regenerated tree listing, and the modal state machine for the add /
//! delete / rename / search flows. Every commit point here builds the
//! forward command *and* its inverse, applies the forward command, and
//! pushes the pair onto the history, so undo/redo replay plain data and
//! never capture editor state.
//!
//! Mutation discipline: nodes are always re-resolved by path at the moment
//! of use; no reference into the document survives across an operation.

use crate::config::Config;
use crate::document::node::JsonValue;
use crate::document::parser::{clean_literal, parse_literal, to_literal, to_pretty_string};
use crate::document::path::lookup;
use crate::editor::command::{apply, EditCommand, MoveDirection};
use crate::editor::entries::{list_children, TreeEntry, PARENT_KEY};
use crate::editor::history::{EditAction, History};
use crate::editor::nav::{EnterOutcome, NavigationState};
use crate::editor::search::{search, SearchMatch};

/// Which modal is on screen. Exactly one of these (or the main view) is
/// active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    Add,
    Delete,
    Rename,
    Search,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A transient message for the status line.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Which widget inside the search modal has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Query,
    Results,
}

/// Search modal state. `results: None` means "not yet searched", which is
/// distinct from an empty result list.
#[derive(Debug)]
pub struct SearchState {
    pub query: String,
    pub from_root: bool,
    pub results: Option<Vec<SearchMatch>>,
    pub selected: usize,
    pub focus: SearchFocus,
}

/// What the add modal will create, derived from the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    ObjectKey,
    ArrayValue,
}

pub struct EditorState {
    document: JsonValue,
    filename: Option<String>,
    nav: NavigationState,
    history: History,
    entries: Vec<TreeEntry>,
    modal: Modal,
    // Modal input buffers
    key_buffer: String,
    value_buffer: String,
    // Scalar value editor: Some while a scalar is selected; `editing_value`
    // is true while it has keyboard focus
    edit_buffer: Option<String>,
    editing_value: bool,
    viewer_content: String,
    message: Option<Message>,
    search: SearchState,
    dirty: bool,
    indent_size: usize,
}

impl EditorState {
    pub fn new(document: JsonValue, config: &Config) -> Self {
        let mut state = Self {
            document,
            filename: None,
            nav: NavigationState::new(),
            history: History::new(),
            entries: Vec::new(),
            modal: Modal::None,
            key_buffer: String::new(),
            value_buffer: String::new(),
            edit_buffer: None,
            editing_value: false,
            viewer_content: String::new(),
            message: None,
            search: SearchState {
                query: String::new(),
                from_root: config.search_from_root,
                results: None,
                selected: 0,
                focus: SearchFocus::Query,
            },
            dirty: false,
            indent_size: config.indent_size,
        };
        state.entries = list_children(&state.document, state.nav.path());
        state.update_editor_pane();
        state
    }

    // --- accessors used by the UI ---

    pub fn document(&self) -> &JsonValue {
        &self.document
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, name: String) {
        self.filename = Some(name);
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn path(&self) -> &[String] {
        self.nav.path()
    }

    pub fn selected_index(&self) -> usize {
        self.nav.selected_index()
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn key_buffer(&self) -> &str {
        &self.key_buffer
    }

    pub fn value_buffer(&self) -> &str {
        &self.value_buffer
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    pub fn is_editing_value(&self) -> bool {
        self.editing_value
    }

    pub fn viewer_content(&self) -> &str {
        &self.viewer_content
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Key of the currently selected entry, if any (including `..`).
    pub fn selection_key(&self) -> Option<&str> {
        self.entries
            .get(self.nav.selected_index())
            .map(|e| e.key.as_str())
    }

    /// What the add modal would create right now.
    pub fn add_target(&self) -> Option<AddTarget> {
        match self.current_node() {
            JsonValue::Object(_) => Some(AddTarget::ObjectKey),
            JsonValue::Array(_) => Some(AddTarget::ArrayValue),
            _ => None,
        }
    }

    pub fn set_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.message = Some(Message {
            text: text.into(),
            level,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// The node the tree pane currently lists, degrading to the root for
    /// stale paths (same contract as `path::resolve`).
    fn current_node(&self) -> &JsonValue {
        lookup(&self.document, self.nav.path()).unwrap_or(&self.document)
    }

    // --- navigation ---

    pub fn select_previous(&mut self) {
        self.nav.select_previous();
        self.update_editor_pane();
    }

    pub fn select_next(&mut self) {
        self.nav.select_next(self.entries.len());
        self.update_editor_pane();
    }

    /// Enter on the tree: descend, ascend, or focus the value editor.
    pub fn enter_selected(&mut self) {
        let entries = self.entries.clone();
        match self.nav.enter(&self.document, &entries) {
            EnterOutcome::Ascended | EnterOutcome::Descended => {
                self.refresh_listing();
            }
            EnterOutcome::EditValue => {
                self.editing_value = true;
                self.update_editor_pane();
            }
            EnterOutcome::Ignored => {}
        }
    }

    /// Left arrow: go to the parent container.
    pub fn ascend(&mut self) {
        if self.nav.ascend() {
            self.refresh_listing();
        }
    }

    /// Breadcrumb jump; index 0 is the root.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        self.nav.truncate_to(index);
        self.refresh_listing();
    }

    /// Jumps the view to an absolute path, regenerating the listing.
    pub fn jump_to(&mut self, path: Vec<String>) {
        self.nav.jump_to(path);
        self.refresh_listing();
    }

    /// Selects the entry with the given key/index in the current listing.
    pub fn focus_entry(&mut self, key: &str) {
        self.nav.focus_key(&self.entries, key);
        self.update_editor_pane();
    }

    /// Regenerates the listing for the current path and repairs selection.
    fn refresh_listing(&mut self) {
        self.entries = list_children(&self.document, self.nav.path());
        self.nav
            .refresh_and_focus(self.nav.selected_index(), self.entries.len());
        self.update_editor_pane();
    }

    /// Refreshes after a structural edit, trying to select `desired`.
    fn refresh_and_focus_index(&mut self, desired: usize) {
        self.entries = list_children(&self.document, self.nav.path());
        self.nav.refresh_and_focus(desired, self.entries.len());
        self.update_editor_pane();
    }

    /// Refreshes after an edit and reselects the entry with `key`.
    fn refresh_and_focus_key(&mut self, key: &str) {
        self.entries = list_children(&self.document, self.nav.path());
        self.nav.focus_key(&self.entries, key);
        self.update_editor_pane();
    }

    /// Rebuilds the right pane from the current selection: a pretty
    /// viewer for containers, an editable canonical literal for scalars
    /// (`null` renders literally), a placeholder otherwise.
    fn update_editor_pane(&mut self) {
        self.editing_value = false;
        let selected = self
            .entries
            .get(self.nav.selected_index())
            .filter(|e| !e.is_parent())
            .cloned();
        let Some(entry) = selected else {
            self.edit_buffer = None;
            self.viewer_content = if self.entries.is_empty() {
                "Select an item from the left.".to_string()
            } else {
                "Select an item to view/edit.".to_string()
            };
            return;
        };

        let mut child_path = self.nav.path().to_vec();
        child_path.push(entry.key.clone());
        match lookup(&self.document, &child_path) {
            Some(child) if child.is_container() => {
                self.edit_buffer = None;
                self.viewer_content = to_pretty_string(child, self.indent_size);
            }
            Some(child) => {
                self.edit_buffer = Some(to_literal(child));
                self.viewer_content.clear();
            }
            None => {
                self.edit_buffer = None;
                self.viewer_content = "Select an item to view/edit.".to_string();
            }
        }
    }

    // --- scalar value editing ---

    pub fn edit_input(&mut self, c: char) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    /// Esc in the value editor: discard the draft and refocus the tree.
    pub fn cancel_edit(&mut self) {
        self.editing_value = false;
        self.update_editor_pane();
    }

    /// Enter in the value editor: parse the draft (falling back to a
    /// string literal) and commit a SetValue if the value changed.
    pub fn submit_edit(&mut self) {
        self.editing_value = false;
        let Some(draft) = self.edit_buffer.clone() else {
            return;
        };
        let Some(entry) = self
            .entries
            .get(self.nav.selected_index())
            .filter(|e| !e.is_parent())
            .cloned()
        else {
            return;
        };

        let mut child_path = self.nav.path().to_vec();
        child_path.push(entry.key.clone());
        let Some(old_value) = lookup(&self.document, &child_path).cloned() else {
            self.update_editor_pane();
            return;
        };

        let new_value = parse_literal(&draft);
        if new_value == old_value {
            self.update_editor_pane();
            return;
        }

        let path = self.nav.path().to_vec();
        self.commit(EditAction {
            undo: EditCommand::SetValue {
                path: path.clone(),
                key: entry.key.clone(),
                value: old_value,
            },
            redo: EditCommand::SetValue {
                path: path.clone(),
                key: entry.key.clone(),
                value: new_value,
            },
            path,
            focus_key: entry.key.clone(),
        });
        self.refresh_and_focus_key(&entry.key);
    }

    // --- key reordering ---

    /// Moves the selected object key one position earlier/later.
    pub fn move_selected_key(&mut self, direction: MoveDirection) {
        let Some(entry) = self
            .entries
            .get(self.nav.selected_index())
            .filter(|e| !e.is_parent())
            .cloned()
        else {
            return;
        };
        let Some((index, len)) = self
            .current_node()
            .as_object()
            .and_then(|map| map.get_index_of(&entry.key).map(|i| (i, map.len())))
        else {
            return;
        };
        let at_boundary = match direction {
            MoveDirection::Earlier => index == 0,
            MoveDirection::Later => index + 1 == len,
        };
        if at_boundary {
            return;
        }

        let opposite = match direction {
            MoveDirection::Earlier => MoveDirection::Later,
            MoveDirection::Later => MoveDirection::Earlier,
        };
        let path = self.nav.path().to_vec();
        self.commit(EditAction {
            undo: EditCommand::MoveKey {
                path: path.clone(),
                key: entry.key.clone(),
                direction: opposite,
            },
            redo: EditCommand::MoveKey {
                path: path.clone(),
                key: entry.key.clone(),
                direction,
            },
            path,
            focus_key: entry.key.clone(),
        });
        self.refresh_and_focus_key(&entry.key);
    }

    // --- add modal ---

    pub fn open_add_modal(&mut self) {
        match self.add_target() {
            Some(AddTarget::ObjectKey) => {
                self.key_buffer.clear();
                self.modal = Modal::Add;
            }
            Some(AddTarget::ArrayValue) => {
                self.value_buffer = "null".to_string();
                self.modal = Modal::Add;
            }
            None => {
                self.set_message(
                    "Error: Can only add to Objects or Arrays.",
                    MessageLevel::Error,
                );
            }
        }
    }

    pub fn submit_add(&mut self) {
        match self.add_target() {
            Some(AddTarget::ObjectKey) => self.submit_add_key(),
            Some(AddTarget::ArrayValue) => self.submit_add_element(),
            None => self.close_modal(),
        }
    }

    fn submit_add_key(&mut self) {
        let key = clean_literal(&self.key_buffer);
        if key.is_empty() {
            self.set_message("Error: Key cannot be empty.", MessageLevel::Error);
            return;
        }

        // An existing key is overwritten in place; its old value is the
        // inverse then, not a key removal
        let previous = self
            .current_node()
            .as_object()
            .and_then(|map| map.get(&key))
            .cloned();
        let path = self.nav.path().to_vec();
        let undo = match previous {
            Some(old_value) => EditCommand::SetValue {
                path: path.clone(),
                key: key.clone(),
                value: old_value,
            },
            None => EditCommand::RemoveKey {
                path: path.clone(),
                key: key.clone(),
            },
        };
        self.commit(EditAction {
            undo,
            redo: EditCommand::AddKey {
                path: path.clone(),
                key: key.clone(),
                value: JsonValue::Null,
                index: None,
            },
            path,
            focus_key: key.clone(),
        });
        self.refresh_and_focus_key(&key);
        self.modal = Modal::None;
    }

    fn submit_add_element(&mut self) {
        let value = parse_literal(&self.value_buffer);
        let Some(len) = self.current_node().as_array().map(Vec::len) else {
            self.close_modal();
            return;
        };

        let path = self.nav.path().to_vec();
        let focus_key = len.to_string();
        self.commit(EditAction {
            undo: EditCommand::ArrayRemove {
                path: path.clone(),
                index: len,
            },
            redo: EditCommand::ArrayInsert {
                path: path.clone(),
                index: len,
                value,
            },
            path,
            focus_key: focus_key.clone(),
        });
        self.refresh_and_focus_key(&focus_key);
        self.modal = Modal::None;
    }

    // --- delete modal ---

    pub fn open_delete_modal(&mut self) {
        let deletable = matches!(self.selection_key(), Some(key) if key != PARENT_KEY);
        if deletable {
            self.modal = Modal::Delete;
        } else {
            self.set_message("Error: Cannot delete this item.", MessageLevel::Error);
        }
    }

    pub fn submit_delete(&mut self) {
        let Some(entry) = self
            .entries
            .get(self.nav.selected_index())
            .filter(|e| !e.is_parent())
            .cloned()
        else {
            self.close_modal();
            return;
        };

        let path = self.nav.path().to_vec();
        let action = match self.current_node() {
            JsonValue::Object(map) => map
                .get_index_of(&entry.key)
                .zip(map.get(&entry.key).cloned())
                .map(|(index, old_value)| EditAction {
                    // Reinsert at the original index so undo restores order
                    undo: EditCommand::AddKey {
                        path: path.clone(),
                        key: entry.key.clone(),
                        value: old_value,
                        index: Some(index),
                    },
                    redo: EditCommand::RemoveKey {
                        path: path.clone(),
                        key: entry.key.clone(),
                    },
                    path: path.clone(),
                    focus_key: entry.key.clone(),
                }),
            JsonValue::Array(items) => entry
                .key
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i).cloned().map(|v| (i, v)))
                .map(|(index, old_value)| EditAction {
                    undo: EditCommand::ArrayInsert {
                        path: path.clone(),
                        index,
                        value: old_value,
                    },
                    redo: EditCommand::ArrayRemove {
                        path: path.clone(),
                        index,
                    },
                    path: path.clone(),
                    focus_key: index.saturating_sub(1).to_string(),
                }),
            _ => None,
        };

        match action {
            Some(action) => {
                self.commit(action);
                let desired = self.nav.selected_index().saturating_sub(1);
                self.refresh_and_focus_index(desired);
            }
            None => {
                self.set_message("Error: Failed to delete item.", MessageLevel::Error);
            }
        }
        self.modal = Modal::None;
    }

    // --- rename modal ---

    pub fn open_rename_modal(&mut self) {
        let renameable = matches!(self.selection_key(), Some(key) if key != PARENT_KEY)
            && self.current_node().is_object();
        if !renameable {
            self.set_message("Error: Cannot rename this item.", MessageLevel::Error);
            return;
        }
        self.key_buffer = self
            .selection_key()
            .map(str::to_string)
            .unwrap_or_default();
        self.modal = Modal::Rename;
    }

    pub fn submit_rename(&mut self) {
        let Some(current_key) = self
            .entries
            .get(self.nav.selected_index())
            .filter(|e| !e.is_parent())
            .map(|e| e.key.clone())
        else {
            self.close_modal();
            return;
        };
        let new_key = clean_literal(&self.key_buffer);
        if new_key.is_empty() {
            self.set_message("Error: Key cannot be empty.", MessageLevel::Error);
            return;
        }

        let Some((collides, original_index)) = self
            .current_node()
            .as_object()
            .map(|map| (map.contains_key(&new_key), map.get_index_of(&current_key)))
        else {
            self.close_modal();
            return;
        };
        // Collision check happens before any mutation
        if new_key != current_key && collides {
            self.set_message("Error: This key is already in use.", MessageLevel::Error);
            return;
        }
        if new_key == current_key {
            self.close_modal();
            return;
        }
        let path = self.nav.path().to_vec();
        self.commit(EditAction {
            undo: EditCommand::RenameKey {
                path: path.clone(),
                from: new_key.clone(),
                to: current_key.clone(),
                restore_index: original_index,
            },
            redo: EditCommand::RenameKey {
                path: path.clone(),
                from: current_key,
                to: new_key.clone(),
                restore_index: None,
            },
            path,
            focus_key: new_key.clone(),
        });
        self.refresh_and_focus_key(&new_key);
        self.modal = Modal::None;
    }

    // --- search modal ---

    pub fn open_search_modal(&mut self) {
        self.search.query.clear();
        self.search.results = None;
        self.search.selected = 0;
        self.search.focus = SearchFocus::Query;
        self.modal = Modal::Search;
    }

    pub fn toggle_search_scope(&mut self) {
        self.search.from_root = !self.search.from_root;
    }

    pub fn submit_search(&mut self) {
        if self.search.query.is_empty() {
            return;
        }
        let results = if self.search.from_root {
            search(&self.document, &[], &self.search.query)
        } else {
            let scope = self.nav.path().to_vec();
            match lookup(&self.document, &scope) {
                Some(node) => search(node, &scope, &self.search.query),
                None => search(&self.document, &[], &self.search.query),
            }
        };
        self.search.focus = if results.is_empty() {
            SearchFocus::Query
        } else {
            SearchFocus::Results
        };
        self.search.selected = 0;
        self.search.results = Some(results);
    }

    pub fn search_select_previous(&mut self) {
        self.search.selected = self.search.selected.saturating_sub(1);
    }

    pub fn search_select_next(&mut self) {
        let count = self.search.results.as_ref().map_or(0, Vec::len);
        if self.search.selected + 1 < count {
            self.search.selected += 1;
        }
    }

    /// Jumps the tree to the selected search result.
    pub fn activate_search_result(&mut self) {
        let Some(result) = self
            .search
            .results
            .as_ref()
            .and_then(|r| r.get(self.search.selected))
            .cloned()
        else {
            return;
        };
        let mut parent_path = result.path.clone();
        let Some(focus_key) = parent_path.pop() else {
            return;
        };
        self.nav.jump_to(parent_path);
        self.refresh_and_focus_key(&focus_key);
        self.modal = Modal::None;
    }

    // --- modal plumbing ---

    pub fn modal_input(&mut self, c: char) {
        match self.modal {
            Modal::Add => match self.add_target() {
                Some(AddTarget::ObjectKey) => self.key_buffer.push(c),
                Some(AddTarget::ArrayValue) => self.value_buffer.push(c),
                None => {}
            },
            Modal::Rename => self.key_buffer.push(c),
            Modal::Search => {
                if self.search.focus == SearchFocus::Query {
                    self.search.query.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn modal_backspace(&mut self) {
        match self.modal {
            Modal::Add => match self.add_target() {
                Some(AddTarget::ObjectKey) => {
                    self.key_buffer.pop();
                }
                Some(AddTarget::ArrayValue) => {
                    self.value_buffer.pop();
                }
                None => {}
            },
            Modal::Rename => {
                self.key_buffer.pop();
            }
            Modal::Search => {
                if self.search.focus == SearchFocus::Query {
                    self.search.query.pop();
                }
            }
            _ => {}
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    // --- history ---

    /// Applies an action's forward command and records it.
    fn commit(&mut self, action: EditAction) {
        apply(&mut self.document, &action.redo);
        self.history.push(action);
        self.dirty = true;
    }

    pub fn perform_undo(&mut self) {
        let restore = self
            .history
            .undo(&mut self.document)
            .map(|action| (action.path.clone(), action.focus_key.clone()));
        match restore {
            Some((path, focus_key)) => {
                self.dirty = true;
                self.restore_after_history(path, &focus_key);
            }
            None => self.set_message("Nothing to undo.", MessageLevel::Info),
        }
    }

    pub fn perform_redo(&mut self) {
        let restore = self
            .history
            .redo(&mut self.document)
            .map(|action| (action.path.clone(), action.focus_key.clone()));
        match restore {
            Some((path, focus_key)) => {
                self.dirty = true;
                self.restore_after_history(path, &focus_key);
            }
            None => self.set_message("Nothing to redo.", MessageLevel::Info),
        }
    }

    /// Puts the view back where a replayed action happened: its parent
    /// path, with the action's focus key selected (or row 0 if gone).
    fn restore_after_history(&mut self, path: Vec<String>, focus_key: &str) {
        self.nav.jump_to(path);
        self.refresh_and_focus_key(focus_key);
    }
}
