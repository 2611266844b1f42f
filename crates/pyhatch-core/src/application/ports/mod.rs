//! Ports (interfaces) for the application layer.

pub mod output;

pub use output::{
    CommandOutcome, CommandRunner, CommandSpec, Filesystem, Prompter, Question, TemplateStore,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockPrompter, MockTemplateStore};
