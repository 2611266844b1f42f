//! Application layer errors.
//!
//! These errors represent failures while talking to the outside world:
//! the filesystem, the template store, external commands and the user.
//! Rule violations on the data itself are `DomainError`s.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A template the scaffold needs is not in the store.
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The create target already holds files and `--force` was not given.
    #[error("{path} already exists and is not empty. Delete it then try again.")]
    TargetNotEmpty { path: PathBuf },

    /// A previous virtual environment is in the way.
    #[error("Directory '{path}' already exists. Remove it then try again.")]
    VenvExists { path: PathBuf },

    /// An external command ran and exited unsuccessfully.
    #[error("'{command}' failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command could not be started at all.
    #[error("could not run '{command}': {reason}")]
    CommandUnavailable { command: String, reason: String },

    /// The build/publish target is not a directory.
    #[error("Directory {path} does not exist")]
    NotADirectory { path: PathBuf },

    /// The build/publish target has no packaging manifest.
    #[error("{path} does not exist")]
    MissingManifest { path: PathBuf },

    /// Leftover artifacts would be uploaded along with the new build.
    #[error("Remove '{path}' directory before building to ensure a clean build")]
    StaleBuildOutput { path: PathBuf },

    /// Nothing to upload.
    #[error("No build artifacts found in '{path}'")]
    NoArtifacts { path: PathBuf },

    /// Reading an answer from the user failed.
    #[error("Failed to read input: {reason}")]
    PromptFailed { reason: String },

    /// The user ended input or pressed Ctrl-C while being prompted.
    #[error("Interrupted")]
    Interrupted,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("returncode {code}"),
        None => "no returncode (terminated by a signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("The built-in template '{name}' is missing from this build"),
                "This is a packaging bug, please report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TargetNotEmpty { path } => vec![
                format!("Remove the existing directory: rm -rf {}", path.display()),
                "Use --force to write into it anyway (may overwrite files)".into(),
                "Choose a different package name".into(),
            ],
            Self::VenvExists { path } => vec![
                format!("Remove the old environment: rm -rf {}", path.display()),
                "Use --force to reuse the directory".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "Check the command output above for details".into(),
            ],
            Self::CommandUnavailable { .. } => vec![
                "Ensure the command is installed and in your PATH".into(),
                "Tool names can be overridden in the [tools] config section".into(),
            ],
            Self::NotADirectory { .. } | Self::MissingManifest { .. } => vec![
                "Pass the root of a package (setup.py should be in this dir)".into(),
            ],
            Self::StaleBuildOutput { path } => vec![
                format!("rm -rf {}", path.display()),
            ],
            Self::NoArtifacts { .. } => vec![
                "Run `pyhatch build <path>` first, or publish without --no-build".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Use --yes to skip the prompts and accept the defaults".into(),
            ],
            Self::Interrupted => vec![],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::Configuration,
            Self::TargetNotEmpty { .. }
            | Self::VenvExists { .. }
            | Self::NotADirectory { .. }
            | Self::MissingManifest { .. }
            | Self::StaleBuildOutput { .. } => ErrorCategory::Validation,
            Self::NoArtifacts { .. } => ErrorCategory::NotFound,
            Self::Interrupted => ErrorCategory::Interrupted,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::CommandUnavailable { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_mentions_returncode() {
        let err = ApplicationError::CommandFailed {
            command: "git init /tmp/x".into(),
            code: Some(128),
        };
        assert_eq!(
            err.to_string(),
            "'git init /tmp/x' failed with returncode 128"
        );
    }

    #[test]
    fn command_killed_by_signal() {
        let err = ApplicationError::CommandFailed {
            command: "python3 -m venv".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn stale_build_output_is_user_error() {
        let err = ApplicationError::StaleBuildOutput {
            path: PathBuf::from("/p/dist"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("/p/dist"));
    }
}
