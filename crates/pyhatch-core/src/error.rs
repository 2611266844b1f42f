//! Unified error handling for pyhatch core.
//!
//! Wraps domain and application errors behind one root type that knows how
//! to categorise itself and what to suggest to the user.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for pyhatch core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PyhatchError {
    /// Errors from the domain layer (invalid names, paths).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, templates, external commands).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl PyhatchError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the user interrupted an interactive prompt.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Interrupted))
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Interrupted,
    Internal,
}

/// Convenient result type alias.
pub type PyhatchResult<T> = Result<T, PyhatchError>;
