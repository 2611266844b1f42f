//! Infrastructure adapters for pyhatch.
//!
//! This crate implements the ports defined in `pyhatch-core::application::ports`.
//! It contains all I/O: the disk, the compiled-in templates, child
//! processes and line-based prompts.

pub mod filesystem;
pub mod process;
pub mod prompt;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use prompt::LinePrompter;
pub use template_store::{BuiltinTemplates, InMemoryTemplates};
