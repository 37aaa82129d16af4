//! Editor core: mutation commands, history, tree entries, navigation,
//! search, and the central editor state.

pub mod command;
pub mod entries;
pub mod history;
pub mod nav;
pub mod search;
pub mod state;
