//! Input handling for keyboard events and keybindings.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::InputEvent;
