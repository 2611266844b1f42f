//! Build/Publish Driver.
//!
//! Wraps the standard setuptools + twine workflow:
//! `pip install --upgrade setuptools wheel twine`, then
//! `python setup.py sdist bdist_wheel`, then `python -m twine upload`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec, Filesystem},
        services::run_checked,
    },
    domain::layout,
    error::PyhatchResult,
};

/// Upload URL of the staging index.
pub const STAGING_INDEX_URL: &str = "https://test.pypi.org/simple/";

/// Program names for the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    pub python: String,
    pub pip: String,
    pub git: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            python: "python3".into(),
            pip: "pip".into(),
            git: "git".into(),
        }
    }
}

/// Where `publish` uploads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageIndex {
    #[default]
    Production,
    Staging,
}

impl PackageIndex {
    pub fn from_test_flag(test: bool) -> Self {
        if test { Self::Staging } else { Self::Production }
    }

    /// Explicit `--repository-url`, `None` for twine's default.
    pub fn repository_url(self) -> Option<&'static str> {
        match self {
            Self::Production => None,
            Self::Staging => Some(STAGING_INDEX_URL),
        }
    }
}

impl fmt::Display for PackageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("PyPI"),
            Self::Staging => f.write_str("TestPyPI"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub dist: PathBuf,
    pub artifacts: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub index: PackageIndex,
    pub artifacts: Vec<PathBuf>,
}

pub struct BuildService {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
    toolchain: Toolchain,
}

impl BuildService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            toolchain,
        }
    }

    /// Build sdist and wheel into `path/dist`.
    ///
    /// # Errors
    ///
    /// `NotADirectory` / `MissingManifest` if `path` is not a package root,
    /// `StaleBuildOutput` if `dist` already holds files, `CommandFailed` if
    /// either step exits non-zero.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn build(&self, path: &Path) -> PyhatchResult<BuildReport> {
        self.check_package(path)?;

        let dist = path.join(layout::DIST_DIR);
        if self.filesystem.is_non_empty_dir(&dist)? {
            return Err(ApplicationError::StaleBuildOutput { path: dist }.into());
        }

        let upgrade = CommandSpec::new(&self.toolchain.pip)
            .args(["install", "--upgrade", "--quiet", "setuptools", "wheel", "twine"])
            .current_dir(path);
        run_checked(self.runner.as_ref(), &upgrade)?;

        let build = CommandSpec::new(&self.toolchain.python)
            .args([layout::SETUP_PY, "--quiet", "sdist", "bdist_wheel"])
            .current_dir(path);
        run_checked(self.runner.as_ref(), &build)?;

        let artifacts = if self.filesystem.is_dir(&dist) {
            self.filesystem.list_files(&dist)?
        } else {
            Vec::new()
        };
        info!(count = artifacts.len(), "Build finished");

        Ok(BuildReport { dist, artifacts })
    }

    /// Upload everything in `path/dist` with twine.
    #[instrument(skip_all, fields(path = %path.display(), %index))]
    pub fn publish(&self, path: &Path, index: PackageIndex) -> PyhatchResult<PublishReport> {
        self.check_package(path)?;

        let dist = path.join(layout::DIST_DIR);
        let artifacts = if self.filesystem.is_dir(&dist) {
            self.filesystem.list_files(&dist)?
        } else {
            Vec::new()
        };
        if artifacts.is_empty() {
            return Err(ApplicationError::NoArtifacts { path: dist }.into());
        }

        let mut upload = CommandSpec::new(&self.toolchain.python).args(["-m", "twine", "upload"]);
        if let Some(url) = index.repository_url() {
            upload = upload.args(["--repository-url", url]);
        }
        for artifact in &artifacts {
            upload = upload.path_arg(artifact);
        }
        run_checked(self.runner.as_ref(), &upload.current_dir(path))?;

        Ok(PublishReport { index, artifacts })
    }

    /// Fail fast unless `path` is a directory holding `setup.py`.
    pub fn check_package(&self, path: &Path) -> PyhatchResult<()> {
        if !self.filesystem.is_dir(path) {
            return Err(ApplicationError::NotADirectory {
                path: path.to_path_buf(),
            }
            .into());
        }
        let manifest = path.join(layout::SETUP_PY);
        if !self.filesystem.is_file(&manifest) {
            return Err(ApplicationError::MissingManifest { path: manifest }.into());
        }
        Ok(())
    }
}
