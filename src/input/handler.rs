//! Input event handler for polling and processing keyboard events.

use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;

use anyhow::{Context, Result};
use termion::event::Event;
use termion::input::{Events, TermRead};

use super::keys::{map_key_event, InputContext, InputEvent};
use crate::editor::state::{EditorState, Modal, SearchFocus};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events and converts them to
/// high-level InputEvents, then updates the editor state accordingly.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event was available, None otherwise.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input
        // buffer, preventing character loss during paste
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns Ok(true) if the application should quit, Ok(false) otherwise.
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        let context = input_context(state);
        let input_event = map_key_event(event, context);
        // Any recognized keypress dismisses the previous status message
        if input_event != InputEvent::Unknown {
            state.clear_message();
        }
        match input_event {
            InputEvent::Quit => return Ok(true),
            InputEvent::MoveUp => match context {
                InputContext::SearchModal => state.search_select_previous(),
                _ => state.select_previous(),
            },
            InputEvent::MoveDown => match context {
                InputContext::SearchModal => state.search_select_next(),
                _ => state.select_next(),
            },
            InputEvent::Ascend => state.ascend(),
            InputEvent::Activate => state.enter_selected(),
            InputEvent::OpenAdd => state.open_add_modal(),
            InputEvent::OpenDelete => state.open_delete_modal(),
            InputEvent::OpenRename => state.open_rename_modal(),
            InputEvent::OpenSearch => state.open_search_modal(),
            InputEvent::MoveKeyEarlier => {
                state.move_selected_key(crate::editor::command::MoveDirection::Earlier)
            }
            InputEvent::MoveKeyLater => {
                state.move_selected_key(crate::editor::command::MoveDirection::Later)
            }
            InputEvent::Undo => state.perform_undo(),
            InputEvent::Redo => state.perform_redo(),
            InputEvent::Confirm => match context {
                InputContext::ValueEdit => state.submit_edit(),
                InputContext::TextModal => match state.modal() {
                    Modal::Add => state.submit_add(),
                    Modal::Rename => state.submit_rename(),
                    _ => {}
                },
                InputContext::ConfirmModal => state.submit_delete(),
                InputContext::SearchModal => match state.search().focus {
                    SearchFocus::Query => state.submit_search(),
                    SearchFocus::Results => state.activate_search_result(),
                },
                InputContext::Tree => {}
            },
            InputEvent::Cancel => match context {
                InputContext::ValueEdit => state.cancel_edit(),
                _ => state.close_modal(),
            },
            InputEvent::ToggleScope => state.toggle_search_scope(),
            InputEvent::InsertCharacter(c) => match context {
                InputContext::ValueEdit => state.edit_input(c),
                _ => state.modal_input(c),
            },
            InputEvent::InsertBackspace => match context {
                InputContext::ValueEdit => state.edit_backspace(),
                _ => state.modal_backspace(),
            },
            InputEvent::Unknown => {}
        }

        Ok(false)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the key mapping context from the current editor state.
fn input_context(state: &EditorState) -> InputContext {
    match state.modal() {
        Modal::Add | Modal::Rename => InputContext::TextModal,
        Modal::Delete => InputContext::ConfirmModal,
        Modal::Search => InputContext::SearchModal,
        Modal::None => {
            if state.is_editing_value() {
                InputContext::ValueEdit
            } else {
                InputContext::Tree
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::parser::parse_document;
    use termion::event::Key;

    fn state_for(text: &str) -> EditorState {
        EditorState::new(parse_document(text).unwrap(), &Config::default())
    }

    fn press(handler: &mut InputHandler, state: &mut EditorState, c: char) -> bool {
        handler
            .handle_event(Event::Key(Key::Char(c)), state)
            .unwrap()
    }

    #[test]
    fn test_q_quits_from_tree_only() {
        let mut handler = InputHandler::new();
        let mut state = state_for(r#"{"a": 1}"#);

        state.open_rename_modal();
        assert!(!press(&mut handler, &mut state, 'q'));
        assert!(state.key_buffer().ends_with('q'));
        state.close_modal();

        assert!(press(&mut handler, &mut state, 'q'));
    }

    #[test]
    fn test_add_flow_through_keys() {
        let mut handler = InputHandler::new();
        let mut state = state_for("{}");

        press(&mut handler, &mut state, 'a');
        assert_eq!(state.modal(), Modal::Add);
        press(&mut handler, &mut state, 'k');
        press(&mut handler, &mut state, '\n');
        assert_eq!(state.modal(), Modal::None);
        assert_eq!(
            *state.document(),
            parse_document(r#"{"k": null}"#).unwrap()
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut handler = InputHandler::new();
        let mut state = state_for(r#"{"a": 1}"#);

        press(&mut handler, &mut state, 'd');
        assert_eq!(state.modal(), Modal::Delete);
        press(&mut handler, &mut state, 'n');
        assert_eq!(state.modal(), Modal::None);
        assert_eq!(*state.document(), parse_document(r#"{"a": 1}"#).unwrap());

        press(&mut handler, &mut state, 'd');
        press(&mut handler, &mut state, 'y');
        assert_eq!(*state.document(), parse_document("{}").unwrap());
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut handler = InputHandler::new();
        let mut state = state_for("{}");

        press(&mut handler, &mut state, 'a');
        press(&mut handler, &mut state, 'k');
        press(&mut handler, &mut state, '\n');

        press(&mut handler, &mut state, 'z');
        assert_eq!(*state.document(), parse_document("{}").unwrap());
        press(&mut handler, &mut state, 'y');
        assert_eq!(
            *state.document(),
            parse_document(r#"{"k": null}"#).unwrap()
        );
    }

    #[test]
    fn test_esc_cancels_value_edit_without_commit() {
        let mut handler = InputHandler::new();
        let mut state = state_for(r#"{"v": 1}"#);

        press(&mut handler, &mut state, '\n'); // focus value editor
        assert!(state.is_editing_value());
        press(&mut handler, &mut state, '9');
        handler
            .handle_event(Event::Key(Key::Esc), &mut state)
            .unwrap();
        assert!(!state.is_editing_value());
        assert_eq!(*state.document(), parse_document(r#"{"v": 1}"#).unwrap());
        assert_eq!(state.edit_buffer(), Some("1"));
    }

    #[test]
    fn test_next_key_clears_stale_message() {
        let mut handler = InputHandler::new();
        let mut state = state_for("42"); // scalar root, add is invalid

        press(&mut handler, &mut state, 'a');
        assert!(state.message().is_some());

        handler
            .handle_event(Event::Key(Key::Down), &mut state)
            .unwrap();
        assert!(state.message().is_none());
    }

    #[test]
    fn test_search_keys() {
        let mut handler = InputHandler::new();
        let mut state = state_for(r#"{"apple": 1, "banana": "apple"}"#);

        press(&mut handler, &mut state, '/');
        assert_eq!(state.modal(), Modal::Search);
        for c in "apple".chars() {
            press(&mut handler, &mut state, c);
        }
        press(&mut handler, &mut state, '\n'); // run search
        assert_eq!(state.search().results.as_ref().map(Vec::len), Some(2));

        // Down then Enter jumps to the second match
        handler
            .handle_event(Event::Key(Key::Down), &mut state)
            .unwrap();
        press(&mut handler, &mut state, '\n');
        assert_eq!(state.modal(), Modal::None);
        assert_eq!(state.selection_key(), Some("banana"));
    }
}
