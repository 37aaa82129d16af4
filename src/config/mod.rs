//! Configuration system for jsonquill.
//!
//! This module provides the configuration structure for jsonquill with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use jsonquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the jsonquill application.
///
/// All fields have sensible defaults via `Config::default()`, and every
/// field is individually optional in the TOML file.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `indent_size` - Number of spaces per indentation level (default: 2)
/// * `create_backup` - Create .bak files before saving (default: false)
/// * `search_from_root` - Search the whole document rather than the current node (default: true)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Search the whole document rather than the current node
    #[serde(default = "default_search_from_root")]
    pub search_from_root: bool,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

/// Returns the default search scope.
fn default_search_from_root() -> bool {
    true
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonquill::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.theme, "default-dark");
    /// assert!(config.search_from_root);
    /// assert!(!config.create_backup);
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            indent_size: default_indent_size(),
            create_backup: false,
            search_from_root: default_search_from_root(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
