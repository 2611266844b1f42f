//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! user-facing flows: create a package, build it, publish it.

pub mod build_service;
pub mod config_resolver;
pub mod create_service;
pub mod env_provisioner;
pub mod scaffold_service;
pub mod vcs;

pub use build_service::{BuildReport, BuildService, PackageIndex, PublishReport, Toolchain};
pub use config_resolver::{ConfigResolver, FieldDefaults};
pub use create_service::{CreateReport, CreateService};
pub use env_provisioner::{EnvironmentProvisioner, ProvisionOutcome};
pub use scaffold_service::ScaffoldService;
pub use vcs::VcsInitializer;

use tracing::info;

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec},
    },
    error::PyhatchResult,
};

/// Run `spec` and turn a non-zero exit into `CommandFailed`.
pub(crate) fn run_checked(runner: &dyn CommandRunner, spec: &CommandSpec) -> PyhatchResult<()> {
    info!("running {spec}");
    let outcome = runner.run(spec)?;
    if outcome.success() {
        Ok(())
    } else {
        Err(ApplicationError::CommandFailed {
            command: spec.to_string(),
            code: outcome.code(),
        }
        .into())
    }
}
