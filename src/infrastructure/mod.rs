//! Infrastructure layer - concrete implementations of the application ports

pub mod terminal;

pub use terminal::{TerminalHost, TerminalPrompt, format_location};
