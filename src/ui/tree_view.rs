//! Tree pane rendering.
//!
//! Renders the current node's child listing as a flat list, colored by
//! value type, with the selected row highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::document::node::ValueKind;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;

/// Color for one tree row based on the value kind behind it.
fn kind_color(kind: Option<ValueKind>, colors: &ThemeColors) -> Color {
    match kind {
        Some(ValueKind::Object) => colors.object,
        Some(ValueKind::Array) => colors.array,
        Some(ValueKind::String) => colors.string,
        Some(ValueKind::Number) => colors.number,
        Some(ValueKind::Boolean) => colors.boolean,
        Some(ValueKind::Null) => colors.null,
        // The `..` parent row
        None => colors.foreground,
    }
}

/// Renders the tree pane for the current node.
pub fn render_tree_view(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let items: Vec<ListItem> = state
        .entries()
        .iter()
        .map(|entry| {
            let style = Style::default().fg(kind_color(entry.kind, colors));
            ListItem::new(Line::styled(entry.label.clone(), style))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Document"))
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !state.entries().is_empty() {
        list_state.select(Some(state.selected_index()));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
