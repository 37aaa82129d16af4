//! Editor pane rendering.
//!
//! The right-hand pane shows a read-only pretty view for container
//! selections and an editable single-line value for scalar selections.
//! The pane title switches between "View" and "Edit" so it is obvious
//! which mode the selection is in.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;

/// Renders the viewer/editor pane for the current selection.
pub fn render_editor_pane(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let (title, content, editing) = match state.edit_buffer() {
        Some(buffer) => ("Edit", buffer.to_string(), state.is_editing_value()),
        None => ("View", state.viewer_content().to_string(), false),
    };

    let mut lines: Vec<Line> = Vec::new();
    if editing {
        // Trailing block as a cursor hint while the editor has focus
        lines.push(Line::from(vec![
            Span::raw(content),
            Span::styled("█", Style::default().fg(colors.info)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "[Enter] save  [Esc] cancel",
            Style::default().fg(colors.info),
        ));
    } else {
        for text_line in content.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
    }

    let border_style = if editing {
        Style::default()
            .fg(colors.info)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.foreground)
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
