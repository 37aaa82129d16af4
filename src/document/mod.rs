//! Document model: ordered JSON values, parsing, and path resolution.

pub mod node;
pub mod parser;
pub mod path;
