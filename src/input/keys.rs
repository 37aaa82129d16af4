//! Keyboard event mapping and input event types.

use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move selection, open a
/// modal) rather than specific key presses, allowing for context-specific
/// keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the editor
    Quit,
    /// Move tree selection up
    MoveUp,
    /// Move tree selection down
    MoveDown,
    /// Go to the parent container
    Ascend,
    /// Activate the selected entry (descend or edit)
    Activate,
    /// Open the add modal
    OpenAdd,
    /// Open the delete confirmation modal
    OpenDelete,
    /// Open the rename modal
    OpenRename,
    /// Open the search modal
    OpenSearch,
    /// Move the selected key one position earlier
    MoveKeyEarlier,
    /// Move the selected key one position later
    MoveKeyLater,
    /// Undo last change
    Undo,
    /// Redo last undone change
    Redo,
    /// Confirm the current modal or editor input
    Confirm,
    /// Dismiss the current modal or editor input
    Cancel,
    /// Toggle the search scope between root and current node
    ToggleScope,
    /// Insert a character into the focused text input
    InsertCharacter(char),
    /// Backspace in the focused text input
    InsertBackspace,
    /// Unknown or unmapped key
    Unknown,
}

/// What currently has keyboard focus, for key mapping purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The tree pane (no modal, not editing a value)
    Tree,
    /// The scalar value editor in the right pane
    ValueEdit,
    /// A free-text modal (add, rename)
    TextModal,
    /// The delete confirmation modal
    ConfirmModal,
    /// The search modal
    SearchModal,
}

/// Maps a termion Event to an InputEvent based on the current focus.
///
/// Single-letter bindings only apply in the tree context; inside modals
/// and the value editor, letters are text input.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use jsonquill::input::keys::{map_key_event, InputContext, InputEvent};
///
/// let event = Event::Key(Key::Char('a'));
/// assert_eq!(map_key_event(event.clone(), InputContext::Tree), InputEvent::OpenAdd);
/// assert_eq!(
///     map_key_event(event, InputContext::TextModal),
///     InputEvent::InsertCharacter('a')
/// );
/// ```
pub fn map_key_event(event: Event, context: InputContext) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match context {
        InputContext::Tree => match key {
            Key::Char('q') => InputEvent::Quit,
            Key::Up => InputEvent::MoveUp,
            Key::Down => InputEvent::MoveDown,
            Key::Left => InputEvent::Ascend,
            Key::Right | Key::Char('\n') => InputEvent::Activate,
            Key::Char('a') => InputEvent::OpenAdd,
            Key::Char('d') => InputEvent::OpenDelete,
            Key::Char('r') => InputEvent::OpenRename,
            Key::Char('/') => InputEvent::OpenSearch,
            Key::Char('[') => InputEvent::MoveKeyEarlier,
            Key::Char(']') => InputEvent::MoveKeyLater,
            Key::Char('z') => InputEvent::Undo,
            Key::Char('y') => InputEvent::Redo,
            _ => InputEvent::Unknown,
        },
        InputContext::ValueEdit | InputContext::TextModal => match key {
            Key::Esc => InputEvent::Cancel,
            Key::Char('\n') => InputEvent::Confirm,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
        InputContext::ConfirmModal => match key {
            Key::Char('y') | Key::Char('\n') => InputEvent::Confirm,
            Key::Char('n') | Key::Esc => InputEvent::Cancel,
            _ => InputEvent::Unknown,
        },
        InputContext::SearchModal => match key {
            Key::Esc => InputEvent::Cancel,
            Key::Char('\n') => InputEvent::Confirm,
            Key::Char('\t') => InputEvent::ToggleScope,
            Key::Up => InputEvent::MoveUp,
            Key::Down => InputEvent::MoveDown,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}
