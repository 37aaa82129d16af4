//! Color definitions for jsonquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the jsonquill terminal UI. Colors are organized into three
//! categories: syntax highlighting, UI elements, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a jsonquill theme.
///
/// Colors are organized into three main categories:
/// - **Syntax colors**: Used for tree rows by value type (objects, arrays, strings, ...)
/// - **UI colors**: Used for interface elements (background, foreground, status line)
/// - **Semantic colors**: Used for messages and highlights (errors, warnings, info)
///
/// # Examples
///
/// ```
/// use jsonquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Syntax colors
    /// Color for object-valued tree rows.
    pub object: Color,
    /// Color for array-valued tree rows.
    pub array: Color,
    /// Color for string values.
    pub string: Color,
    /// Color for number values.
    pub number: Color,
    /// Color for boolean values (true/false).
    pub boolean: Color,
    /// Color for null values.
    pub null: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Background color for the selected tree row.
    pub selection_bg: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages and indicators.
    pub error: Color,
    /// Color for warning messages and indicators.
    pub warning: Color,
    /// Color for informational messages and indicators.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors throughout so the palette adapts to the user's
    /// terminal color scheme.
    pub fn default_dark() -> Self {
        Self {
            object: Color::Cyan,
            array: Color::Magenta,
            string: Color::Green,
            number: Color::Blue,
            boolean: Color::Yellow,
            null: Color::Red,

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            selection_bg: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// Same hue assignments as the dark scheme with darker variants where
    /// the light ones wash out on a white background.
    pub fn default_light() -> Self {
        Self {
            object: Color::Cyan,
            array: Color::Magenta,
            string: Color::Green,
            number: Color::Blue,
            boolean: Color::Yellow,
            null: Color::Red,

            background: Color::Reset,
            foreground: Color::Black,
            selection_bg: Color::Gray,
            status_line_bg: Color::Black,
            status_line_fg: Color::White,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_uses_terminal_background() {
        let colors = ThemeColors::default_dark();
        assert_eq!(colors.background, Color::Reset);
        assert_eq!(colors.object, Color::Cyan);
    }

    #[test]
    fn test_light_foreground_is_dark() {
        let colors = ThemeColors::default_light();
        assert_eq!(colors.foreground, Color::Black);
    }
}
