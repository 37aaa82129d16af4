//! Centered modal popups for the add, delete, rename, and search flows.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::editor::state::{AddTarget, EditorState, SearchFocus};
use crate::theme::colors::ThemeColors;

fn input_line<'a>(buffer: &'a str, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::raw(buffer),
        Span::styled("█", Style::default().fg(colors.info)),
    ])
}

/// Renders the add modal: a key prompt for objects, a value prompt for
/// arrays.
pub fn render_add_modal(f: &mut Frame, state: &EditorState, colors: &ThemeColors) {
    let (title, prompt, buffer) = match state.add_target() {
        Some(AddTarget::ArrayValue) => ("Add Value", "Value:", state.value_buffer()),
        _ => ("Add Key", "New key name:", state.key_buffer()),
    };

    let area = centered_rect(44, 6, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::styled(prompt, Style::default().fg(colors.foreground)),
        input_line(buffer, colors),
        Line::from(""),
        Line::styled("[Enter] confirm  [Esc] cancel", Style::default().fg(colors.info)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().bg(colors.background).fg(colors.foreground));
    f.render_widget(paragraph, area);
}

/// Renders the delete confirmation modal.
pub fn render_delete_modal(f: &mut Frame, state: &EditorState, colors: &ThemeColors) {
    let target = state.selection_key().unwrap_or("");
    let area = centered_rect(44, 5, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                format!("\"{}\"", target),
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::styled("[y] delete  [n] cancel", Style::default().fg(colors.info)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Confirm Delete"))
        .style(Style::default().bg(colors.background).fg(colors.foreground));
    f.render_widget(paragraph, area);
}

/// Renders the rename modal, prefilled with the current key.
pub fn render_rename_modal(f: &mut Frame, state: &EditorState, colors: &ThemeColors) {
    let area = centered_rect(44, 6, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::styled("New key name:", Style::default().fg(colors.foreground)),
        input_line(state.key_buffer(), colors),
        Line::from(""),
        Line::styled("[Enter] confirm  [Esc] cancel", Style::default().fg(colors.info)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Rename Key"))
        .style(Style::default().bg(colors.background).fg(colors.foreground));
    f.render_widget(paragraph, area);
}

/// Renders the search modal: query input, scope toggle, and the result
/// list (or its not-yet-searched / no-results placeholders).
pub fn render_search_modal(f: &mut Frame, state: &EditorState, colors: &ThemeColors) {
    let search = state.search();
    let area = centered_rect(60, 16, f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("Search");
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new("").block(block).style(
            Style::default().bg(colors.background).fg(colors.foreground),
        ),
        area,
    );

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(1), // query
            ratatui::layout::Constraint::Length(1), // scope
            ratatui::layout::Constraint::Min(1),    // results
            ratatui::layout::Constraint::Length(1), // hints
        ])
        .split(inner);

    let query_style = if search.focus == SearchFocus::Query {
        Style::default().fg(colors.info).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.foreground)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Find: ", query_style),
            Span::raw(search.query.clone()),
            Span::styled("█", Style::default().fg(colors.info)),
        ])),
        chunks[0],
    );

    let scope = if search.from_root {
        "[x] Search from root"
    } else {
        "[ ] Search from root (current node only)"
    };
    f.render_widget(
        Paragraph::new(Line::styled(scope, Style::default().fg(colors.foreground))),
        chunks[1],
    );

    match &search.results {
        None => {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "Type a query and press Enter.",
                    Style::default().fg(colors.foreground),
                )),
                chunks[2],
            );
        }
        Some(results) if results.is_empty() => {
            f.render_widget(
                Paragraph::new(Line::styled(
                    "No results found.",
                    Style::default().fg(colors.warning),
                )),
                chunks[2],
            );
        }
        Some(results) => {
            let items: Vec<ListItem> = results
                .iter()
                .map(|m| ListItem::new(m.label()))
                .collect();
            let list = List::new(items)
                .style(Style::default().fg(colors.foreground))
                .highlight_style(
                    Style::default()
                        .bg(colors.selection_bg)
                        .add_modifier(Modifier::BOLD),
                );
            let mut list_state = ListState::default();
            if search.focus == SearchFocus::Results {
                list_state.select(Some(search.selected));
            }
            f.render_stateful_widget(list, chunks[2], &mut list_state);
        }
    }

    f.render_widget(
        Paragraph::new(Line::styled(
            "[Enter] search/jump  [Tab] scope  [Esc] close",
            Style::default().fg(colors.info),
        )),
        chunks[3],
    );
}
