/// UI module for jsonquill terminal interface.
///
/// This module provides the main UI structure for rendering the terminal interface,
/// including layout management and widget composition.
pub mod breadcrumbs;
pub mod editor_pane;
pub mod modals;
pub mod status_line;
pub mod tree_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::editor::state::{EditorState, Modal};
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of four areas:
/// - Breadcrumb bar (top): the path from the root to the current node
/// - Tree pane (left): children of the current node
/// - Editor pane (right): viewer or value editor for the selection
/// - Status line (bottom): file name, messages, and key hints
///
/// Modals (add, delete, rename, search) render as centered popups over
/// the main view.
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonquill::ui::UI;
    /// use jsonquill::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("default-dark").unwrap();
    /// let ui = UI::new(theme);
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &EditorState,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Breadcrumb bar
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                ])
                .split(f.area());

            breadcrumbs::render_breadcrumbs(f, chunks[0], state, &self.theme.colors);

            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(32), Constraint::Percentage(60)])
                .split(chunks[1]);

            tree_view::render_tree_view(f, panes[0], state, &self.theme.colors);
            editor_pane::render_editor_pane(f, panes[1], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[2], state, &self.theme.colors);

            match state.modal() {
                Modal::Add => modals::render_add_modal(f, state, &self.theme.colors),
                Modal::Delete => modals::render_delete_modal(f, state, &self.theme.colors),
                Modal::Rename => modals::render_rename_modal(f, state, &self.theme.colors),
                Modal::Search => modals::render_search_modal(f, state, &self.theme.colors),
                Modal::None => {}
            }
        })?;

        Ok(())
    }
}

/// Returns a centered rectangle of the given size, clamped to `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
