//! jsonquill - A terminal-based structural JSON editor.
//!
//! The crate is split into a document core (ordered JSON tree, path
//! resolution, reversible mutation commands, undo/redo history, tree-entry
//! derivation, navigation, search) and the terminal plumbing around it
//! (input handling, ratatui rendering, file I/O, configuration, theming).

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod input;
pub mod theme;
pub mod ui;
