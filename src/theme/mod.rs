//! Theme system for jsonquill.
//!
//! This module provides the theme infrastructure for jsonquill, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! jsonquill includes two built-in themes:
//! - `"default-dark"`: A dark theme optimized for low-light environments
//! - `"default-light"`: A light theme for well-lit environments
//!
//! # Examples
//!
//! ```
//! use jsonquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! println!("Theme: {}", theme.name);
//! println!("Background: {:?}", theme.colors.background);
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the jsonquill terminal UI.
///
/// Each theme has a name and a set of colors defined by [`ThemeColors`].
/// Themes can be loaded from the built-in set using [`get_builtin_theme`].
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name.
///
/// # Arguments
///
/// * `name` - The name of the theme to retrieve. Valid values are:
///   - `"default-dark"`: Dark theme for low-light environments
///   - `"default-light"`: Light theme for well-lit environments
///
/// # Examples
///
/// ```
/// use jsonquill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("default-dark").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default-dark" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_dark(),
        }),
        "default-light" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_light(),
        }),
        _ => None,
    }
}

/// Returns the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<String> {
    vec!["default-dark".to_string(), "default-light".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_builtin_theme() {
        let theme = get_builtin_theme("default-light").unwrap();
        assert_eq!(theme.name, "default-light");
        assert!(get_builtin_theme("gruvbox").is_none());
    }

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in list_builtin_themes() {
            assert!(get_builtin_theme(&name).is_some(), "theme {name} missing");
        }
    }
}
