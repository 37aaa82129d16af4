//! Navigation state: breadcrumb path and selection repair.
//!
//! Holds the current path (the breadcrumb stack from the root) and the
//! selected index into the current tree listing, plus the rules for how
//! selection moves after structural edits: after any refresh the selection
//! is either the desired index, if it still exists, or 0.

use crate::document::node::JsonValue;
use crate::document::path::lookup;
use crate::editor::entries::{index_of_key, TreeEntry};

/// What pressing Enter on a tree entry should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Moved up to the parent; listing must be regenerated
    Ascended,
    /// Moved into a container child; listing must be regenerated
    Descended,
    /// Selected child is a scalar; focus the value editor
    EditValue,
    /// Nothing to do (empty listing, stale selection)
    Ignored,
}

/// Current path and selection in the tree pane.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current_path: Vec<String>,
    selected_index: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[String] {
        &self.current_path
    }

    pub fn at_root(&self) -> bool {
        self.current_path.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Moves the selection up one row.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Moves the selection down one row, clamped to the listing length.
    pub fn select_next(&mut self, entry_count: usize) {
        if self.selected_index + 1 < entry_count {
            self.selected_index += 1;
        }
    }

    /// Handles Enter on the selected entry.
    ///
    /// `..` pops a path segment; a container child pushes its key; a
    /// scalar child asks the caller to focus the value editor. The caller
    /// regenerates the listing (and resets the selection to 0) whenever
    /// the path changed.
    pub fn enter(&mut self, document: &JsonValue, entries: &[TreeEntry]) -> EnterOutcome {
        let Some(entry) = entries.get(self.selected_index) else {
            return EnterOutcome::Ignored;
        };
        if entry.is_parent() {
            if self.current_path.pop().is_some() {
                self.selected_index = 0;
                return EnterOutcome::Ascended;
            }
            return EnterOutcome::Ignored;
        }

        let mut child_path = self.current_path.clone();
        child_path.push(entry.key.clone());
        match lookup(document, &child_path) {
            Some(child) if child.is_container() => {
                self.current_path = child_path;
                self.selected_index = 0;
                EnterOutcome::Descended
            }
            Some(_) => EnterOutcome::EditValue,
            None => EnterOutcome::Ignored,
        }
    }

    /// Pops one path segment. Returns false at the root.
    pub fn ascend(&mut self) -> bool {
        if self.current_path.pop().is_some() {
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    /// Truncates the path for a breadcrumb jump; index 0 is the root.
    pub fn truncate_to(&mut self, breadcrumb_index: usize) {
        self.current_path.truncate(breadcrumb_index);
        self.selected_index = 0;
    }

    /// Replaces the whole path (search-result jumps, history restore).
    pub fn jump_to(&mut self, path: Vec<String>) {
        self.current_path = path;
        self.selected_index = 0;
    }

    /// Selection repair after a structural mutation: keep `desired` if it
    /// still addresses a row, otherwise fall back to the top.
    pub fn refresh_and_focus(&mut self, desired: usize, entry_count: usize) {
        self.selected_index = if desired < entry_count { desired } else { 0 };
    }

    /// Selects the entry with the given key, or row 0 if it is gone.
    pub fn focus_key(&mut self, entries: &[TreeEntry], key: &str) {
        self.selected_index = index_of_key(entries, key).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_document;
    use crate::editor::entries::list_children;

    #[test]
    fn test_enter_descends_into_container() {
        let doc = parse_document(r#"{"obj": {"k": 1}, "num": 5}"#).unwrap();
        let entries = list_children(&doc, &[]);
        let mut nav = NavigationState::new();

        assert_eq!(nav.enter(&doc, &entries), EnterOutcome::Descended);
        assert_eq!(nav.path(), ["obj".to_string()]);
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_enter_scalar_requests_editor() {
        let doc = parse_document(r#"{"obj": {"k": 1}, "num": 5}"#).unwrap();
        let entries = list_children(&doc, &[]);
        let mut nav = NavigationState::new();
        nav.refresh_and_focus(1, entries.len());

        assert_eq!(nav.enter(&doc, &entries), EnterOutcome::EditValue);
        assert!(nav.at_root());
    }

    #[test]
    fn test_enter_parent_row_ascends() {
        let doc = parse_document(r#"{"obj": {"k": 1}}"#).unwrap();
        let mut nav = NavigationState::new();
        nav.jump_to(vec!["obj".to_string()]);
        let entries = list_children(&doc, nav.path());

        assert_eq!(nav.enter(&doc, &entries), EnterOutcome::Ascended);
        assert!(nav.at_root());
    }

    #[test]
    fn test_enter_on_empty_listing_ignored() {
        let doc = parse_document(r#"{}"#).unwrap();
        let entries = list_children(&doc, &[]);
        let mut nav = NavigationState::new();
        assert_eq!(nav.enter(&doc, &entries), EnterOutcome::Ignored);
    }

    #[test]
    fn test_selection_movement_clamps() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected_index(), 0);

        nav.select_next(3);
        nav.select_next(3);
        assert_eq!(nav.selected_index(), 2);
        nav.select_next(3);
        assert_eq!(nav.selected_index(), 2);
    }

    #[test]
    fn test_refresh_and_focus_falls_back_to_zero() {
        let mut nav = NavigationState::new();
        nav.refresh_and_focus(2, 5);
        assert_eq!(nav.selected_index(), 2);
        nav.refresh_and_focus(7, 5);
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_focus_key_missing_selects_top() {
        let doc = parse_document(r#"{"a": 1, "b": 2}"#).unwrap();
        let entries = list_children(&doc, &[]);
        let mut nav = NavigationState::new();

        nav.focus_key(&entries, "b");
        assert_eq!(nav.selected_index(), 1);
        nav.focus_key(&entries, "gone");
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_breadcrumb_truncate() {
        let mut nav = NavigationState::new();
        nav.jump_to(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        nav.truncate_to(1);
        assert_eq!(nav.path(), ["a".to_string()]);
        nav.truncate_to(0);
        assert!(nav.at_root());
    }
}
