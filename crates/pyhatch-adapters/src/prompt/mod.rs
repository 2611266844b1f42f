//! Prompt adapters for the `Prompter` port.

mod line;

pub use line::LinePrompter;
