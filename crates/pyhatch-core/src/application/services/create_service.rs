//! Create Service - the full `create` use case.
//!
//! 1. Refuse a non-empty target unless forced
//! 2. Scaffold the package files
//! 3. Provision the environment
//! 4. Initialize git

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, TemplateStore},
        services::{
            EnvironmentProvisioner, ProvisionOutcome, ScaffoldService, Toolchain, VcsInitializer,
        },
    },
    domain::{PackageConfig, PackageName},
    error::PyhatchResult,
};

/// What `create` produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReport {
    pub root: PathBuf,
    pub name: PackageName,
    /// Generated files, relative to `root`.
    pub files: Vec<PathBuf>,
    pub environment: ProvisionOutcome,
}

pub struct CreateService {
    filesystem: Arc<dyn Filesystem>,
    scaffold: ScaffoldService,
    provisioner: EnvironmentProvisioner,
    vcs: VcsInitializer,
}

impl CreateService {
    pub fn new(
        templates: Arc<dyn TemplateStore>,
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
        toolchain: &Toolchain,
    ) -> Self {
        Self {
            scaffold: ScaffoldService::new(templates, Arc::clone(&filesystem)),
            provisioner: EnvironmentProvisioner::new(
                Arc::clone(&filesystem),
                Arc::clone(&runner),
                &toolchain.python,
            ),
            vcs: VcsInitializer::new(runner, &toolchain.git),
            filesystem,
        }
    }

    /// Fail with `TargetNotEmpty` if `path` already holds anything and
    /// `force` is unset. Callers run this before prompting.
    pub fn ensure_target_available(&self, path: &Path, force: bool) -> PyhatchResult<()> {
        if !force && self.filesystem.is_non_empty_dir(path)? {
            return Err(ApplicationError::TargetNotEmpty {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    #[instrument(skip_all, fields(package = %config.name(), path = %config.path().display()))]
    pub fn create(&self, config: &PackageConfig) -> PyhatchResult<CreateReport> {
        self.ensure_target_available(config.path(), config.force())?;

        let structure = self.scaffold.scaffold(config)?;
        let environment = self.provisioner.provision(config)?;
        self.vcs.init(config.path())?;

        info!("Package created");
        Ok(CreateReport {
            root: config.path().to_path_buf(),
            name: config.name().clone(),
            files: structure.files().map(|f| f.path.clone()).collect(),
            environment,
        })
    }
}
