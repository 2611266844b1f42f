//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyhatch-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::error::PyhatchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyhatch_adapters::filesystem::LocalFilesystem` (production)
/// - `pyhatch_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PyhatchResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PyhatchResult<()>;

    /// Create an empty file if nothing is at `path`; existing contents are kept.
    fn touch(&self, path: &Path) -> PyhatchResult<()>;

    /// Check if anything exists at `path`, a dangling symlink included.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// True when `path` is a directory with at least one entry.
    /// A missing path is not an error and yields `false`.
    fn is_non_empty_dir(&self, path: &Path) -> PyhatchResult<bool>;

    /// Regular files directly inside `dir`, sorted by path.
    fn list_files(&self, dir: &Path) -> PyhatchResult<Vec<PathBuf>>;

    /// Create a symbolic link at `link` pointing to `target`.
    fn symlink(&self, target: &Path, link: &Path) -> PyhatchResult<()>;
}

/// Port for package template lookup.
///
/// Implemented by:
/// - `pyhatch_adapters::template_store::BuiltinTemplates` (compiled in)
/// - `pyhatch_adapters::template_store::InMemoryTemplates` (testing)
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template text by name.
    ///
    /// # Errors
    ///
    /// `ApplicationError::TemplateNotFound` if no template has that name.
    fn get(&self, name: &str) -> PyhatchResult<String>;
}

/// Port for running external programs (python, pip, git, twine).
///
/// Implemented by:
/// - `pyhatch_adapters::process::SystemCommandRunner` (production)
/// - `pyhatch_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutcome`], not as an
    /// error. Failing to start the program at all is
    /// `ApplicationError::CommandUnavailable`.
    fn run(&self, spec: &CommandSpec) -> PyhatchResult<CommandOutcome>;
}

/// Port for asking the user a question.
///
/// Implemented by:
/// - `pyhatch_adapters::prompt::LinePrompter` (any `BufRead`)
/// - the CLI's terminal prompter
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Ask `question` and return the raw answer, trimmed.
    ///
    /// An empty string means "accept the default"; the caller substitutes
    /// it. End of input is `ApplicationError::Interrupted`.
    fn ask(&self, question: &Question) -> PyhatchResult<String>;
}

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    quiet: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            quiet: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Path argument, converted lossily.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy().into_owned())
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Discard the program's standard output.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// How a finished command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    code: Option<i32>,
}

impl CommandOutcome {
    /// `None` means the process was terminated by a signal.
    pub fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn ok() -> Self {
        Self { code: Some(0) }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// One prompt: a label, the value used on empty input, and the suggested
/// choices shown alongside it. Answers outside `options` are still allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub label: String,
    pub default: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new(label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: default.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| (*o).to_string()).collect();
        self
    }

    /// `label` or `label (a/b/c)`; the default is shown by the prompter.
    pub fn prompt_text(&self) -> String {
        if self.options.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.options.join("/"))
        }
    }
}
