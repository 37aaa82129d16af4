//! Breadcrumb bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;

/// Renders the path from the root to the current node, e.g.
/// `root > list > 0`. The final segment is highlighted.
pub fn render_breadcrumbs(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let mut spans = Vec::new();
    let path = state.path();
    let dim = Style::default().fg(colors.foreground);
    let current = Style::default()
        .fg(colors.info)
        .add_modifier(Modifier::BOLD);

    let root_style = if path.is_empty() { current } else { dim };
    spans.push(Span::styled("root", root_style));
    for (i, segment) in path.iter().enumerate() {
        spans.push(Span::styled(" > ", dim));
        let style = if i + 1 == path.len() { current } else { dim };
        spans.push(Span::styled(segment.clone(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}
