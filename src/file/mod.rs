//! File loading and saving.

pub mod loader;
pub mod saver;
