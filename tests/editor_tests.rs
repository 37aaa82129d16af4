//! Integration tests for editing sessions driven through EditorState.

use jsonquill::config::Config;
use jsonquill::document::parser::parse_document;
use jsonquill::editor::command::MoveDirection;
use jsonquill::editor::state::{EditorState, Modal};

fn state_for(text: &str) -> EditorState {
    EditorState::new(parse_document(text).unwrap(), &Config::default())
}

fn type_text(state: &mut EditorState, text: &str) {
    for c in text.chars() {
        state.modal_input(c);
    }
}

#[test]
fn test_full_editing_session() {
    let mut state = state_for(r#"{"config": {"retries": 3}, "tags": ["a"]}"#);

    // Descend into "config" and edit the scalar
    state.enter_selected();
    assert_eq!(state.path(), ["config".to_string()]);
    state.select_next(); // past ".." to "retries"
    state.enter_selected();
    assert!(state.is_editing_value());
    state.edit_backspace();
    state.edit_input('5');
    state.submit_edit();

    // Back up and append to "tags"
    state.ascend();
    assert!(state.path().is_empty());
    state.select_next(); // "tags"
    state.enter_selected();
    state.open_add_modal();
    // The array prompt starts prefilled with "null"; clear it first
    for _ in 0.."null".len() {
        state.modal_backspace();
    }
    type_text(&mut state, "\"b\"");
    state.submit_add();

    assert_eq!(
        *state.document(),
        parse_document(r#"{"config": {"retries": 5}, "tags": ["a", "b"]}"#).unwrap()
    );
}

#[test]
fn test_add_key_selects_new_entry() {
    let mut state = state_for(r#"{"a": 1}"#);
    state.open_add_modal();
    type_text(&mut state, "b");
    state.submit_add();

    assert_eq!(state.selection_key(), Some("b"));
    assert!(state.is_dirty());
    assert_eq!(
        *state.document(),
        parse_document(r#"{"a": 1, "b": null}"#).unwrap()
    );
}

#[test]
fn test_delete_only_child_leaves_empty_object() {
    let mut state = state_for(r#"{"only": 1}"#);
    state.open_delete_modal();
    state.submit_delete();

    assert_eq!(*state.document(), parse_document("{}").unwrap());
    assert!(state.entries().is_empty());
    assert_eq!(state.selection_key(), None);
}

#[test]
fn test_rename_keeps_value_and_moves_to_end() {
    let mut state = state_for(r#"{"first": {"x": 1}, "second": 2}"#);
    state.open_rename_modal();
    type_text(&mut state, "_renamed");
    state.submit_rename();

    let map = state.document().as_object().unwrap();
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["second", "first_renamed"]);
    assert_eq!(
        *map.get("first_renamed").unwrap(),
        parse_document(r#"{"x": 1}"#).unwrap()
    );
}

#[test]
fn test_rename_rejected_inside_array() {
    let mut state = state_for(r#"[1, 2]"#);
    state.open_rename_modal();
    assert_eq!(state.modal(), Modal::None);
    assert!(state.message().is_some());
}

#[test]
fn test_move_key_reorders_and_selection_follows() {
    let mut state = state_for(r#"{"a": 1, "b": 2, "c": 3}"#);
    state.select_next();
    state.select_next(); // "c"
    state.move_selected_key(MoveDirection::Earlier);
    state.move_selected_key(MoveDirection::Earlier);

    let keys: Vec<&String> = state.document().as_object().unwrap().keys().collect();
    assert_eq!(keys, ["c", "a", "b"]);
    assert_eq!(state.selection_key(), Some("c"));
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_selection_repair_after_external_shrink() {
    let mut state = state_for(r#"[10, 20, 30]"#);
    state.select_next();
    state.select_next(); // index 2
    state.open_delete_modal();
    state.submit_delete();

    // Two entries remain and the selection points at a valid row
    assert_eq!(state.entries().len(), 2);
    assert!(state.selected_index() < state.entries().len());
}

#[test]
fn test_breadcrumb_jump() {
    let mut state = state_for(r#"{"a": {"b": {"c": 1}}}"#);
    state.enter_selected();
    state.select_next();
    state.enter_selected();
    assert_eq!(state.path(), ["a".to_string(), "b".to_string()]);

    state.jump_to_breadcrumb(1);
    assert_eq!(state.path(), ["a".to_string()]);
    state.jump_to_breadcrumb(0);
    assert!(state.path().is_empty());
}

#[test]
fn test_escape_keeps_document_clean() {
    let mut state = state_for(r#"{"v": "keep"}"#);
    state.enter_selected();
    state.edit_input('x');
    state.cancel_edit();

    assert!(!state.is_dirty());
    assert_eq!(
        *state.document(),
        parse_document(r#"{"v": "keep"}"#).unwrap()
    );
}
