// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through reports and tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Invalid package path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Invalid entry point '{entrypoint}': {reason}")]
    InvalidEntrypoint { entrypoint: String, reason: String },

    #[error("Duplicate path in package layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in package layout: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Package layout is empty")]
    EmptyLayout,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { name, .. } => vec![
                format!("'{name}' must also work as a Python module name"),
                "Use letters, digits and underscores, starting with a letter".into(),
                "Examples: myapp, my_app, tool2".into(),
            ],
            Self::InvalidPath { .. } => vec![
                "Pass a directory name or a path ending in the package name".into(),
            ],
            Self::InvalidEntrypoint { .. } => vec![
                "The entry point is a file inside the package, e.g. main.py or cli.py".into(),
            ],
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyLayout => {
                vec!["This is a bug in pyhatch, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. }
            | Self::InvalidPath { .. }
            | Self::InvalidEntrypoint { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyLayout => {
                ErrorCategory::Internal
            }
        }
    }
}
