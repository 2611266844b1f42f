//! VCS Initializer.

use std::path::Path;
use std::sync::Arc;

use tracing::instrument;

use crate::{
    application::{
        ports::{CommandRunner, CommandSpec},
        services::run_checked,
    },
    error::PyhatchResult,
};

/// Turns a freshly scaffolded package into a git repository.
pub struct VcsInitializer {
    runner: Arc<dyn CommandRunner>,
    git: String,
}

impl VcsInitializer {
    pub fn new(runner: Arc<dyn CommandRunner>, git: impl Into<String>) -> Self {
        Self {
            runner,
            git: git.into(),
        }
    }

    /// `git init <path>` with stdout discarded. Re-running on an existing
    /// repository is harmless; git reinitializes it.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn init(&self, path: &Path) -> PyhatchResult<()> {
        let spec = CommandSpec::new(&self.git).arg("init").path_arg(path).quiet();
        run_checked(self.runner.as_ref(), &spec)
    }
}
