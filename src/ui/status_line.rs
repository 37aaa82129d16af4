//! Status line rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::state::{EditorState, MessageLevel};
use crate::theme::colors::ThemeColors;

const KEY_HELP: &str = "[a] Add | [d] Delete | [r] Rename | [/] Search | [z] Undo | [y] Redo | [q] Quit";

/// Renders the bottom status line: file name (with a `*` dirty marker),
/// the current message if any, and the key help.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let base = Style::default()
        .bg(colors.status_line_bg)
        .fg(colors.status_line_fg);

    let mut spans = Vec::new();
    let name = state.filename().unwrap_or("[no file]");
    let marker = if state.is_dirty() { "*" } else { "" };
    spans.push(Span::styled(format!(" {}{} ", name, marker), base));

    if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        spans.push(Span::styled("| ", base));
        spans.push(Span::styled(
            message.text.clone(),
            base.patch(Style::default().fg(color)),
        ));
        spans.push(Span::styled(" ", base));
    }

    spans.push(Span::styled(format!("| {}", KEY_HELP), base));

    let paragraph = Paragraph::new(Line::from(spans)).style(base);
    f.render_widget(paragraph, area);
}
